//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for guess-the-breed
#[derive(Parser, Debug)]
#[command(name = "guess-the-breed")]
#[command(author, version, about = "Guess the dog breed from a random photo")]
#[command(long_about = r#"
Guess the Breed shows a random dog photo from dog.ceo together with four
breed names. Pick the right one by typing its number.

Each round:
1. A random breed is chosen and a photo of it is fetched
2. Three other breeds are mixed in as distractors
3. You answer, and the correct breed is revealed

Configuration files are loaded from (in priority order):
1. GUESS_BREED_* environment variables (e.g. GUESS_BREED_API__BASE_URL)
2. --config <path>     Explicit config file
3. ./guess-the-breed.toml       Project-level config
4. ~/.config/guess-the-breed/config.toml   Global config

Example:
  guess-the-breed
  guess-the-breed --rounds 5
  guess-the-breed --seed 42 -v
"#)]
pub struct Cli {
    /// Number of rounds to play (default: until you quit)
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Seed for breed selection, for reproducible quizzes
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Base URL of the dog.ceo API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
