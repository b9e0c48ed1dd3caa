//! Breed catalog

use super::breed::Breed;
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Smallest catalog that can produce a question with distinct options
pub const MIN_CATALOG_SIZE: usize = 4;

/// Every breed known to a quiz session, in provider order
///
/// A catalog always holds at least [`MIN_CATALOG_SIZE`] distinct breeds,
/// so drawing distractors from it always terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedCatalog {
    breeds: Vec<Breed>,
}

impl BreedCatalog {
    /// Build a catalog, dropping repeated breeds (first occurrence wins)
    pub fn new(breeds: Vec<Breed>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(breeds.len());
        let breeds: Vec<Breed> = breeds
            .into_iter()
            .filter(|breed| seen.insert(breed.clone()))
            .collect();

        if breeds.len() < MIN_CATALOG_SIZE {
            return Err(DomainError::InsufficientCatalog {
                found: breeds.len(),
                required: MIN_CATALOG_SIZE,
            });
        }

        Ok(Self { breeds })
    }

    pub fn as_slice(&self) -> &[Breed] {
        &self.breeds
    }
}
