//! Image load lifecycle
//!
//! Tracks one fetch at a time. Every fetch gets a fresh generation number;
//! results from the fetch pipeline carry it back and are checked against
//! the controller in [`LoadController::accept`] before anything is applied.

use crate::image::{CancelToken, Image};

/// Where the viewport's image is in its lifecycle
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Empty,
    Loading,
    Loaded(Image),
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }

    pub fn image(&self) -> Option<&Image> {
        match self {
            LoadState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    /// Short name for logs and snapshots
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Empty => "empty",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed => "failed",
        }
    }
}

/// Load state plus the bookkeeping needed to discard stale results
#[derive(Debug, Default)]
pub struct LoadController {
    state: LoadState,
    /// Generation of the most recent fetch
    generation: u64,
    /// Set by release; results arriving while set are dropped
    pending_release: bool,
    /// Token for the in-flight fetch, when the source supports cancellation
    cancel_token: Option<CancelToken>,
}

impl LoadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_release(&self) -> bool {
        self.pending_release
    }

    pub fn cancel_token(&self) -> Option<CancelToken> {
        self.cancel_token
    }

    /// Start a fetch unless one is running or an image is already loaded.
    ///
    /// Returns the generation the new fetch must carry.
    pub fn begin_load(&mut self) -> Option<u64> {
        if matches!(self.state, LoadState::Loading | LoadState::Loaded(_)) {
            tracing::debug!(
                "begin_load ignored: state is {} (generation {})",
                self.state.label(),
                self.generation
            );
            return None;
        }

        self.generation += 1;
        self.pending_release = false;
        self.cancel_token = None;
        self.state = LoadState::Loading;
        tracing::debug!("begin_load: generation {}", self.generation);
        Some(self.generation)
    }

    /// Record the cancel token handed out by the source for `generation`
    pub fn fetch_started(&mut self, generation: u64, token: CancelToken) {
        if self.accept(generation) {
            self.cancel_token = Some(token);
        } else {
            tracing::debug!(
                "Ignoring cancel token for stale generation {} (current {})",
                generation,
                self.generation
            );
        }
    }

    /// Single checkpoint for every asynchronous result.
    ///
    /// A result is current only if no release happened since its fetch began,
    /// it belongs to the latest generation and the controller still waits
    /// for it.
    pub fn accept(&self, generation: u64) -> bool {
        !self.pending_release && generation == self.generation && self.state.is_loading()
    }

    /// Finish the current fetch with an image
    pub fn finish_loaded(&mut self, image: Image) {
        tracing::debug!(
            "Load generation {} finished: {}x{}",
            self.generation,
            image.width(),
            image.height()
        );
        self.cancel_token = None;
        self.state = LoadState::Loaded(image);
    }

    /// Finish the current fetch without an image
    pub fn finish_failed(&mut self) {
        tracing::debug!("Load generation {} failed", self.generation);
        self.cancel_token = None;
        self.state = LoadState::Failed;
    }

    /// Tear down: suppress late results and reset to `Empty`.
    ///
    /// Returns the token to cancel at the source, if a fetch was in flight.
    /// Calling this again is harmless.
    pub fn release(&mut self) -> Option<CancelToken> {
        self.pending_release = true;
        if !matches!(self.state, LoadState::Empty) {
            tracing::debug!(
                "release: {} -> empty (generation {})",
                self.state.label(),
                self.generation
            );
        }
        self.state = LoadState::Empty;
        self.cancel_token.take()
    }

    /// Re-run the fetch, but only after a failure
    pub fn retry(&mut self) -> Option<u64> {
        if !self.state.is_failed() {
            tracing::debug!("retry ignored: state is {}", self.state.label());
            return None;
        }
        self.begin_load()
    }
}
