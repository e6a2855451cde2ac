//! Loading notification port
//!
//! Defines how the fetch use case reports that a request is in progress.

/// Callback for the loading state of a recommendation fetch
///
/// Implementations live in the presentation layer (spinner, status line).
/// `on_loading_end` is called exactly once for every `on_loading_start`,
/// on success and failure alike.
pub trait FetchProgress: Send + Sync {
    /// Called when the request is about to be sent
    fn on_loading_start(&self, concerns: usize);

    /// Called when the request has finished, whatever the outcome
    fn on_loading_end(&self);
}

/// No-op progress for when loading state is not displayed
pub struct NoProgress;

impl FetchProgress for NoProgress {
    fn on_loading_start(&self, _concerns: usize) {}
    fn on_loading_end(&self) {}
}

/// Ends the loading state when dropped
pub(crate) struct LoadingGuard<'a> {
    progress: &'a dyn FetchProgress,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn start(progress: &'a dyn FetchProgress, concerns: usize) -> Self {
        progress.on_loading_start(concerns);
        Self { progress }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.progress.on_loading_end();
    }
}
