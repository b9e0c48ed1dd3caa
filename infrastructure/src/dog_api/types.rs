//! dog.ceo response bodies
//!
//! Every endpoint answers `{"message": ..., "status": "success"}`; only the
//! shape of `message` differs.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Value of `status` on a successful response
pub const STATUS_SUCCESS: &str = "success";

/// Body of `GET /api/breeds/list/all`
///
/// `message` maps each base breed to its (possibly empty) sub-breeds.
#[derive(Debug, Deserialize)]
pub struct BreedsListResponse {
    pub message: BTreeMap<String, Vec<String>>,
    pub status: String,
}

/// Body of `GET /api/breed/<breed>[/<sub>]/images/random`
#[derive(Debug, Deserialize)]
pub struct BreedImageResponse {
    pub message: String,
    pub status: String,
}
