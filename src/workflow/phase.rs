//! Workflow phases and the per-submission session.

use crate::post::{ResolvedPost, SelectionSet};

/// The resolved post and the user's selection for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    post: ResolvedPost,
    selection: SelectionSet,
}

impl Session {
    /// Opens a session for `post` with every image selected.
    pub fn new(post: ResolvedPost) -> Self {
        let selection = SelectionSet::all(post.images.len());
        Self { post, selection }
    }

    /// Get a reference to the resolved post.
    pub fn post(&self) -> &ResolvedPost {
        &self.post
    }

    /// Get a reference to the selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Get a mutable reference to the selection.
    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    /// Selected image URLs, in post order.
    pub fn selected_images(&self) -> Vec<&String> {
        self.selection.selected_items(&self.post.images)
    }
}

/// Where the workflow currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Nothing in progress.
    #[default]
    Idle,
    /// A submission is waiting on the backend.
    Submitting,
    /// A post was resolved and awaits selection.
    ResultReady(Session),
    /// The last submission failed with this message.
    SubmitFailed(String),
    /// The batch loop is running for `total` images of `owner`.
    Downloading { owner: String, total: usize },
}

impl Phase {
    /// Short name of the phase, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::ResultReady(_) => "result_ready",
            Phase::SubmitFailed(_) => "submit_failed",
            Phase::Downloading { .. } => "downloading",
        }
    }

    /// Return `true` while a submission or a download is running.
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Submitting | Phase::Downloading { .. })
    }

    /// The failure message to display, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Phase::SubmitFailed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Phase::ResultReady(session) => Some(session),
            _ => None,
        }
    }
}

/// What a call to [`Workflow::submit`](super::Workflow::submit) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty reference or another operation in flight; nothing was sent.
    Ignored,
    /// The post was resolved.
    Ready { owner: String, images: usize },
    /// The backend call failed with this message.
    Failed(String),
}
