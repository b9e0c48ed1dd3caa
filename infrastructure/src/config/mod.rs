//! Configuration file loading for guess-the-breed
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GUESS_BREED_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./guess-the-breed.toml` or `./.guess-the-breed.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/guess-the-breed/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileOutputConfig, FileQuizConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
