//! Quiz question value objects

use super::breed::Breed;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of answer options shown for every question
pub const OPTION_COUNT: usize = 4;

/// Locator of a breed image, as returned by the provider (Value Object)
///
/// The domain treats the locator as opaque; adapters decide what a valid
/// address looks like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Create a new image locator, rejecting blank strings
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::InvalidImageUrl(url));
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published quiz question (Value Object)
///
/// Holds an image of the correct breed and exactly [`OPTION_COUNT`]
/// distinct options, one of which is the correct breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    image_url: ImageUrl,
    correct: Breed,
    options: Vec<Breed>,
}

impl QuizQuestion {
    /// Create a question, checking the option invariants
    pub fn new(
        image_url: ImageUrl,
        correct: Breed,
        options: Vec<Breed>,
    ) -> Result<Self, DomainError> {
        if options.len() != OPTION_COUNT {
            return Err(DomainError::InvalidOptions(format!(
                "expected {} options, got {}",
                OPTION_COUNT,
                options.len()
            )));
        }

        let distinct: HashSet<&Breed> = options.iter().collect();
        if distinct.len() != options.len() {
            return Err(DomainError::InvalidOptions(
                "options must be distinct".to_string(),
            ));
        }

        if !distinct.contains(&correct) {
            return Err(DomainError::InvalidOptions(format!(
                "options do not include the correct breed {}",
                correct
            )));
        }

        Ok(Self {
            image_url,
            correct,
            options,
        })
    }

    pub fn image_url(&self) -> &ImageUrl {
        &self.image_url
    }

    pub fn correct_breed(&self) -> &Breed {
        &self.correct
    }

    /// Options in presentation order
    pub fn options(&self) -> &[Breed] {
        &self.options
    }
}
