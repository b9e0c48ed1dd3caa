//! Domain layer for guess-the-breed
//!
//! This crate contains the quiz value objects and their invariants.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Breed**: a lowercase breed name; sub-breeds read `"<breed> <sub-breed>"`
//! - **Catalog**: all breeds a session draws from, at least four distinct
//! - **Question**: an image URL plus four distinct options containing the answer
//! - **Session state**: loading flag, current question, and the graded result

pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use self::core::error::DomainError;
pub use quiz::{
    breed::Breed,
    catalog::{BreedCatalog, MIN_CATALOG_SIZE},
    outcome::QuizOutcome,
    question::{ImageUrl, OPTION_COUNT, QuizQuestion},
    state::{SessionPhase, SessionState},
};
