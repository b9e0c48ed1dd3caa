//! Application layer for guess-the-breed
//!
//! This crate contains the quiz session use case and the port definitions
//! it depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    breed_provider::{BreedProvider, ProviderError},
    progress::{NoQuizProgress, QuizProgressNotifier},
};
pub use use_cases::quiz_session::QuizSession;
