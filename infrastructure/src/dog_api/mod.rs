//! dog.ceo adapter
//!
//! Implements BreedProvider for the public dog.ceo REST API.

pub mod error;
pub mod provider;
pub mod transport;
pub mod types;
