//! Breed value object

use crate::core::error::DomainError;
use crate::core::string::{collapse_whitespace, title_case};
use serde::{Deserialize, Serialize};

/// A normalized dog breed name (Value Object)
///
/// Names are lowercase with single spaces between words. A sub-breed is
/// written as `"<breed> <sub-breed>"`, e.g. `"bulldog french"`. Two breeds
/// are the same breed exactly when their normalized strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Breed {
    name: String,
}

impl Breed {
    /// Create a breed from a raw name, normalizing case and whitespace
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = name.as_ref();
        let name = collapse_whitespace(raw).to_lowercase();
        if name.is_empty() {
            return Err(DomainError::InvalidBreed(raw.to_string()));
        }
        Ok(Self { name })
    }

    /// Create a `"<breed> <sub-breed>"` entry
    pub fn with_sub_breed(base: &str, sub_breed: &str) -> Result<Self, DomainError> {
        Self::new(format!("{} {}", base, sub_breed))
    }

    /// Get the normalized name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Whitespace-separated words of the name
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.name.split_whitespace()
    }

    /// Name with every word capitalized, for display
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Breed {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Breed {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Breed> for String {
    fn from(breed: Breed) -> Self {
        breed.name
    }
}
