//! Breed provider port
//!
//! Defines the interface for fetching breed data from a remote source.

use async_trait::async_trait;
use guess_breed_domain::{Breed, ImageUrl};
use thiserror::Error;

/// Errors that can occur while talking to a breed provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response format: {0}")]
    Format(String),

    #[error("Breed name cannot be addressed: {0}")]
    InvalidBreedFormat(String),
}

impl ProviderError {
    /// Short machine-friendly name of the error kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Transport(_) => "transport",
            ProviderError::Format(_) => "format",
            ProviderError::InvalidBreedFormat(_) => "invalid_breed_format",
        }
    }
}

/// Source of breed names and breed images
///
/// This port defines how the quiz session obtains its data.
/// Implementations (adapters) live in the infrastructure layer and hold no
/// per-session state.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Every known breed, with sub-breeds fanned out as `"<breed> <sub>"`
    async fn fetch_catalog(&self) -> Result<Vec<Breed>, ProviderError>;

    /// One randomly chosen image of `breed`
    ///
    /// Fails with [`ProviderError::InvalidBreedFormat`] when the breed has
    /// neither one nor two words.
    async fn fetch_image(&self, breed: &Breed) -> Result<ImageUrl, ProviderError>;
}
