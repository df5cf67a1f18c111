//! Runtime settings.
//!
//! Settings are read once at startup from, in increasing priority: built-in
//! defaults, a TOML file, and `POSTRIP_`-prefixed environment variables.
//!
//! ```toml
//! api_url = "http://localhost:8000"
//! directory = "downloads"
//! pacing_ms = 500
//! filename_prefix = "insta"
//! progress = true
//! ```

use crate::backend::{BackendConfig, DEFAULT_API_URL};
use crate::downloader::config::{DEFAULT_FILENAME_PREFIX, DEFAULT_PACING};
use crate::downloader::BatchDownloaderBuilder;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env::current_dir;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "postrip.toml";

/// Prefix of the environment variables overriding the settings.
pub const ENV_PREFIX: &str = "POSTRIP_";

/// Settings for the backend and the downloader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the backend.
    pub api_url: String,
    /// Directory the images are saved into.
    pub directory: PathBuf,
    /// Pause between two images, in milliseconds.
    pub pacing_ms: u64,
    /// Leading part of the saved file names.
    pub filename_prefix: String,
    /// Show the progress bar.
    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            directory: current_dir().unwrap_or_default(),
            pacing_ms: DEFAULT_PACING.as_millis() as u64,
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            progress: true,
        }
    }
}

impl Settings {
    /// Loads the settings.
    ///
    /// With `path` set, the file must exist. Without it, `postrip.toml` is
    /// used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(Error::Config(format!("{} not found", path.display())));
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Self::figment(&file)
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Parses settings from a TOML string over the defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Pause between two images.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Backend configuration derived from these settings.
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            api_url: self.api_url.clone(),
            http: HttpClientConfig::default(),
        }
    }

    /// Downloader builder derived from these settings.
    pub fn downloader_builder(&self) -> BatchDownloaderBuilder {
        let builder = if self.progress {
            BatchDownloaderBuilder::new()
        } else {
            BatchDownloaderBuilder::hidden()
        };
        builder
            .directory(self.directory.clone())
            .pacing(self.pacing())
            .filename_prefix(self.filename_prefix.clone())
    }
}
