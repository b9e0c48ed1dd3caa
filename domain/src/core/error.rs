//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid breed name: {0:?}")]
    InvalidBreed(String),

    #[error("Invalid image URL: {0:?}")]
    InvalidImageUrl(String),

    #[error("Catalog has {found} distinct breeds, at least {required} are required")]
    InsufficientCatalog { found: usize, required: usize },

    #[error("Invalid answer options: {0}")]
    InvalidOptions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_catalog_display() {
        let error = DomainError::InsufficientCatalog {
            found: 2,
            required: 4,
        };
        assert_eq!(
            error.to_string(),
            "Catalog has 2 distinct breeds, at least 4 are required"
        );
    }
}
