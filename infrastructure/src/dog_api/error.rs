//! Error types for the dog.ceo adapter

use guess_breed_application::ProviderError;
use thiserror::Error;

/// Result type alias for dog.ceo operations
pub type Result<T> = std::result::Result<T, DogApiError>;

/// Errors that can occur when talking to the dog.ceo API
#[derive(Error, Debug)]
pub enum DogApiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API reported status {0:?}")]
    ApiStatus(String),

    #[error("Response contains an invalid breed name {0:?}")]
    InvalidBreedName(String),

    #[error("Invalid image URL {url:?}: {reason}")]
    InvalidImageUrl { url: String, reason: String },

    #[error("Breed {0:?} must have one or two words")]
    InvalidBreedFormat(String),
}

impl From<DogApiError> for ProviderError {
    fn from(error: DogApiError) -> Self {
        let message = error.to_string();
        match error {
            DogApiError::ClientBuild(_) | DogApiError::Request(_) | DogApiError::Status(_) => {
                ProviderError::Transport(message)
            }
            DogApiError::Decode(_)
            | DogApiError::ApiStatus(_)
            | DogApiError::InvalidBreedName(_)
            | DogApiError::InvalidImageUrl { .. } => ProviderError::Format(message),
            DogApiError::InvalidBreedFormat(breed) => ProviderError::InvalidBreedFormat(breed),
        }
    }
}
