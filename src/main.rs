use clap::Parser;
use color_eyre::eyre::{bail, Result};
use postrip::{BackendClient, PostReference, Settings, Status, SubmitOutcome, Workflow};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "postrip")]
#[command(about = "Resolve a post and download its images", long_about = None)]
struct Cli {
    /// URL of the post
    url: String,

    /// Directory to save the images into
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Only download these images (1-based, comma separated)
    #[arg(short, long, value_delimiter = ',')]
    select: Vec<usize>,

    /// Print the images and exit without downloading
    #[arg(long)]
    list: bool,

    /// Pause between two downloads, in milliseconds
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.dir {
        settings.directory = dir;
    }
    if let Some(pacing_ms) = cli.pacing_ms {
        settings.pacing_ms = pacing_ms;
    }
    if cli.quiet {
        settings.progress = false;
    }

    let backend = BackendClient::new(settings.backend_config())?;
    let downloader = settings
        .downloader_builder()
        .on_complete(|summary| {
            if let Status::Fail(error) = summary.status() {
                eprintln!("  failed #{}: {}", summary.position() + 1, error);
            }
        })
        .build(backend.client().clone());
    let workflow = Workflow::new(backend, downloader);

    let owner = match workflow.submit(&PostReference::new(cli.url)).await {
        SubmitOutcome::Ready { owner, .. } => owner,
        SubmitOutcome::Failed(message) => bail!("{}", message),
        SubmitOutcome::Ignored => bail!("no URL given"),
    };

    if !cli.select.is_empty() {
        // Everything starts selected; clear it, then pick.
        workflow.toggle_all();
        for position in &cli.select {
            match position.checked_sub(1) {
                Some(index) => {
                    workflow.toggle(index);
                }
                None => warn!("Image positions start at 1, ignoring 0"),
            }
        }
    }

    if let Some(session) = workflow.session() {
        println!("{} ({} images)", owner, session.post().images.len());
        for (index, image) in session.post().images.iter().enumerate() {
            let mark = if session.selection().is_selected(index) { "x" } else { " " };
            println!("  [{}] {:>2}. {}", mark, index + 1, image);
        }
    }

    if cli.list {
        workflow.cancel();
        return Ok(());
    }

    let Some(summaries) = workflow.confirm_download().await else {
        println!("Nothing selected.");
        return Ok(());
    };

    let saved = summaries.iter().filter(|s| s.is_success()).count();
    println!(
        "Saved {} of {} images to {}",
        saved,
        summaries.len(),
        settings.directory.display()
    );
    Ok(())
}
