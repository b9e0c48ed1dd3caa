//! Running score for a terminal quiz

use guess_breed_domain::QuizOutcome;

/// Tally of answered and correctly answered questions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    answered: u32,
    correct: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: &QuizOutcome) {
        self.answered += 1;
        if outcome.is_correct() {
            self.correct += 1;
        }
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Share of correct answers, rounded to the nearest percent
    pub fn accuracy_percent(&self) -> u32 {
        if self.answered == 0 {
            return 0;
        }
        (self.correct * 100 + self.answered / 2) / self.answered
    }
}
