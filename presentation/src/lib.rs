//! Presentation layer for guess-the-breed
//!
//! This crate contains the CLI definition, output formatting,
//! loading indicators, and the interactive quiz loop.

pub mod cli;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::{LoadingSpinner, SimpleProgress};
pub use quiz::repl::QuizRepl;
pub use quiz::score::Scoreboard;
