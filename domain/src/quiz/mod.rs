//! Quiz subdomain
//!
//! Value objects for a single-player "guess the breed" quiz:
//!
//! - [`breed::Breed`] - a normalized breed name
//! - [`catalog::BreedCatalog`] - every breed a session can ask about
//! - [`question::QuizQuestion`] - an image with four candidate breeds
//! - [`outcome::QuizOutcome`] - a graded answer
//! - [`state::SessionState`] - the observable state of a session

pub mod breed;
pub mod catalog;
pub mod outcome;
pub mod question;
pub mod state;
