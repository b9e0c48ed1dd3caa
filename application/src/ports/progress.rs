//! Progress notification port
//!
//! Defines the interface for reporting progress while a quiz session runs.

/// Callback for progress updates during a quiz session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait QuizProgressNotifier: Send + Sync {
    /// Called when a question load starts
    fn on_load_start(&self);

    /// Called when a question load finishes, successfully or not
    fn on_load_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoQuizProgress;

impl QuizProgressNotifier for NoQuizProgress {
    fn on_load_start(&self) {}
    fn on_load_complete(&self, _success: bool) {}
}
