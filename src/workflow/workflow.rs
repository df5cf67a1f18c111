//! The acquisition workflow state machine.

use super::phase::{Phase, Session, SubmitOutcome};
use crate::backend::{Backend, BackendClient};
use crate::downloader::{BatchDownloader, DirectorySink, HttpFetcher, ImageFetcher, ImageSink, Summary};
use crate::post::PostReference;

use reqwest::Url;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Workflow over the HTTP backend, saving into a directory.
pub type HttpWorkflow = Workflow<BackendClient, HttpFetcher, DirectorySink>;

/// Drives one submission-to-download cycle at a time.
///
/// All methods take `&self`; the phase doubles as the guard that keeps a
/// second submission or a second batch from starting while one is running.
/// The phase lock is never held across an await point.
pub struct Workflow<B, F, S> {
    backend: B,
    downloader: BatchDownloader<F, S>,
    phase: Mutex<Phase>,
}

impl<B, F, S> fmt::Debug for Workflow<B, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workflow")
            .field("phase", &*self.lock())
            .field("downloader", &self.downloader)
            .finish()
    }
}

impl<B, F, S> Workflow<B, F, S> {
    fn lock(&self) -> MutexGuard<'_, Phase> {
        lock_phase(&self.phase)
    }
}

fn lock_phase(phase: &Mutex<Phase>) -> MutexGuard<'_, Phase> {
    phase.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the workflow in a busy phase until the call that set it completes.
///
/// If the call's future is dropped first, the phase goes back to idle so a
/// new submission can start.
struct BusyGuard<'a> {
    phase: &'a Mutex<Phase>,
    completed: bool,
}

impl<'a> BusyGuard<'a> {
    fn new(phase: &'a Mutex<Phase>) -> Self {
        Self {
            phase,
            completed: false,
        }
    }

    fn complete(mut self, next: Phase) {
        *lock_phase(self.phase) = next;
        self.completed = true;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let mut phase = lock_phase(self.phase);
        warn!(phase = phase.name(), "Call abandoned before completion, back to idle");
        *phase = Phase::Idle;
    }
}

impl<B, F, S> Workflow<B, F, S>
where
    B: Backend,
    F: ImageFetcher,
    S: ImageSink,
{
    /// Creates an idle workflow.
    pub fn new(backend: B, downloader: BatchDownloader<F, S>) -> Self {
        Self {
            backend,
            downloader,
            phase: Mutex::new(Phase::Idle),
        }
    }

    /// Get a reference to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get a reference to the batch downloader.
    pub fn downloader(&self) -> &BatchDownloader<F, S> {
        &self.downloader
    }

    /// Snapshot of the current phase.
    pub fn phase(&self) -> Phase {
        self.lock().clone()
    }

    /// The failure message from the last submission, if it failed.
    pub fn error_message(&self) -> Option<String> {
        self.lock().error_message().map(str::to_string)
    }

    /// Snapshot of the open session, if a result is ready.
    pub fn session(&self) -> Option<Session> {
        self.lock().session().cloned()
    }

    /// Submits `reference` to the backend.
    ///
    /// Ignored when the reference is empty or while a submission or a
    /// download is in flight. Otherwise any previous result, selection or
    /// error is discarded before the call is made. Dropping the returned
    /// future before it completes leaves the workflow idle.
    pub async fn submit(&self, reference: &PostReference) -> SubmitOutcome {
        if reference.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored;
        }

        {
            let mut phase = self.lock();
            if phase.is_busy() {
                debug!(phase = phase.name(), "Ignoring submission while busy");
                return SubmitOutcome::Ignored;
            }
            *phase = Phase::Submitting;
        }
        let guard = BusyGuard::new(&self.phase);
        info!(reference = %reference, "Submitting post");

        let result = self.backend.submit_post(reference).await;

        let (next, outcome) = match result {
            Ok(post) => {
                let outcome = SubmitOutcome::Ready {
                    owner: post.owner.clone(),
                    images: post.images.len(),
                };
                info!(owner = %post.owner, images = post.images.len(), "Post resolved");
                (Phase::ResultReady(Session::new(post)), outcome)
            }
            Err(e) => {
                let message = e.message();
                warn!(error = ?e, "Submission failed");
                (Phase::SubmitFailed(message.clone()), SubmitOutcome::Failed(message))
            }
        };
        guard.complete(next);
        outcome
    }

    /// Flips the selection of one image. Returns `false` when no result is
    /// open.
    pub fn toggle(&self, index: usize) -> bool {
        match &mut *self.lock() {
            Phase::ResultReady(session) => {
                session.selection_mut().toggle(index);
                true
            }
            _ => false,
        }
    }

    /// Applies the select-all / deselect-all action. Returns `false` when no
    /// result is open.
    pub fn toggle_all(&self) -> bool {
        match &mut *self.lock() {
            Phase::ResultReady(session) => {
                session.selection_mut().toggle_all();
                true
            }
            _ => false,
        }
    }

    /// Closes the result view without downloading.
    ///
    /// Only a ready result or a failed submission can be dismissed; a running
    /// submission or download is left alone. Returns `true` if the workflow
    /// went back to idle.
    pub fn cancel(&self) -> bool {
        let mut phase = self.lock();
        match *phase {
            Phase::ResultReady(_) | Phase::SubmitFailed(_) => {
                debug!(phase = phase.name(), "Cancelled");
                *phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Downloads the selected images through the backend proxy.
    ///
    /// Returns `None` without side effects unless a result is open with at
    /// least one image selected. Once started, the batch always runs to the
    /// end and the workflow returns to idle however many images failed. A
    /// dropped future also leaves the workflow idle.
    pub async fn confirm_download(&self) -> Option<Vec<Summary>> {
        let (owner, urls) = {
            let mut phase = self.lock();
            let session = match &*phase {
                Phase::ResultReady(session) if !session.selection().is_empty() => session,
                _ => {
                    debug!(phase = phase.name(), "Nothing to download");
                    return None;
                }
            };

            let owner = session.post().owner.clone();
            let urls: Vec<Url> = session
                .selected_images()
                .into_iter()
                .map(|image| self.backend.proxy_url(image))
                .collect();

            *phase = Phase::Downloading {
                owner: owner.clone(),
                total: urls.len(),
            };
            (owner, urls)
        };
        let guard = BusyGuard::new(&self.phase);

        let summaries = self.downloader.download(&owner, &urls).await;

        guard.complete(Phase::Idle);
        Some(summaries)
    }
}
