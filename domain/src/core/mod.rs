//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - validation errors for quiz value objects
//! - [`string`] - normalization helpers for breed names

pub mod error;
pub mod string;
