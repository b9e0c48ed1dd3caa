//! Random number generator for breed selection

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Generator for a quiz session
///
/// Deterministic when `seed` is set, seeded from operating system entropy
/// otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using seeded random generator ({})", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
