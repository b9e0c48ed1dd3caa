//! Graded answer

use super::breed::Breed;
use serde::{Deserialize, Serialize};

/// Result of grading the user's selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum QuizOutcome {
    /// The user picked the correct breed
    Correct { breed: Breed },
    /// The user picked a distractor
    Incorrect { chosen: Breed, correct: Breed },
}

impl QuizOutcome {
    /// Grade `chosen` against `correct`
    pub fn grade(chosen: &Breed, correct: &Breed) -> Self {
        if chosen == correct {
            Self::Correct {
                breed: correct.clone(),
            }
        } else {
            Self::Incorrect {
                chosen: chosen.clone(),
                correct: correct.clone(),
            }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// The breed that was actually pictured
    pub fn correct_breed(&self) -> &Breed {
        match self {
            Self::Correct { breed } => breed,
            Self::Incorrect { correct, .. } => correct,
        }
    }
}
