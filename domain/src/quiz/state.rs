//! Observable quiz session state

use super::breed::Breed;
use super::question::{ImageUrl, QuizQuestion};

/// Where a session is in its question lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No question available (initial, or after a failed load)
    Idle,
    /// A question load is in flight
    Loading,
    /// A question is shown and awaits an answer
    Ready,
    /// The answer has been graded and the result is shown
    Resolved,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Loading => "loading",
            SessionPhase::Ready => "ready",
            SessionPhase::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of everything a front end needs to render a quiz session
///
/// Snapshots are plain values: mutating one does not affect the session
/// that published it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The current question, if one is loaded
    pub question: Option<QuizQuestion>,
    /// True only while a question load is in flight
    pub is_loading: bool,
    /// True once the current question has been answered
    pub show_result: bool,
    /// Whether the last graded answer was correct
    pub user_got_it_right: bool,
}

impl SessionState {
    pub fn image_url(&self) -> Option<&ImageUrl> {
        self.question.as_ref().map(QuizQuestion::image_url)
    }

    /// Options in presentation order; empty when no question is loaded
    pub fn options(&self) -> &[Breed] {
        self.question
            .as_ref()
            .map(QuizQuestion::options)
            .unwrap_or_default()
    }

    pub fn correct_answer(&self) -> Option<&Breed> {
        self.question.as_ref().map(QuizQuestion::correct_breed)
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.question, self.is_loading, self.show_result) {
            (_, true, _) => SessionPhase::Loading,
            (None, false, _) => SessionPhase::Idle,
            (Some(_), false, false) => SessionPhase::Ready,
            (Some(_), false, true) => SessionPhase::Resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> QuizQuestion {
        let options: Vec<Breed> = ["pug", "akita", "hound", "boxer"]
            .iter()
            .map(|n| Breed::new(n).unwrap())
            .collect();
        QuizQuestion::new(
            ImageUrl::new("https://example.com/pug.jpg").unwrap(),
            Breed::new("pug").unwrap(),
            options,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();
        assert!(state.image_url().is_none());
        assert!(state.options().is_empty());
        assert!(state.correct_answer().is_none());
        assert!(!state.is_loading);
        assert!(!state.show_result);
        assert!(!state.user_got_it_right);
        assert_eq!(state.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = SessionState {
            is_loading: true,
            ..Default::default()
        };
        assert_eq!(state.phase(), SessionPhase::Loading);

        state.is_loading = false;
        state.question = Some(question());
        assert_eq!(state.phase(), SessionPhase::Ready);
        assert_eq!(state.options().len(), 4);
        assert_eq!(state.correct_answer().unwrap().as_str(), "pug");

        state.show_result = true;
        assert_eq!(state.phase(), SessionPhase::Resolved);
        assert_eq!(state.phase().to_string(), "resolved");
    }

    #[test]
    fn test_failed_load_with_stale_result_is_idle() {
        let state = SessionState {
            show_result: true,
            ..Default::default()
        };
        assert_eq!(state.phase(), SessionPhase::Idle);
    }
}
