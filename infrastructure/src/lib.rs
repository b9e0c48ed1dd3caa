//! Infrastructure layer for guess-the-breed
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dog_api;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig,
    FileQuizConfig,
};
pub use dog_api::{
    error::{DogApiError, Result},
    provider::{DEFAULT_BASE_URL, DogApiBreedProvider},
    transport::{HttpTransport, ReqwestTransport},
};
pub use random::session_rng;
