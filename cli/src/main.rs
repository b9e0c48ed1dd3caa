//! CLI entrypoint for guess-the-breed
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use guess_breed_application::{NoQuizProgress, QuizProgressNotifier, QuizSession};
use guess_breed_infrastructure::{ConfigLoader, DogApiBreedProvider, FileConfig, session_rng};
use guess_breed_presentation::{Cli, LoadingSpinner, QuizRepl, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        let config = load_config(&cli)?;
        println!();
        let rendered = ConfigLoader::render(&config).context("Failed to render configuration")?;
        println!("{}", rendered);
        return Ok(());
    }

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting guess-the-breed against {}", config.api.base_url);

    // === Dependency Injection ===
    let provider = Arc::new(DogApiBreedProvider::new(
        config.api.base_url.clone(),
        config.api.timeout(),
    )?);
    let session = QuizSession::new(provider, Box::new(session_rng(config.quiz.seed)));

    let progress: Box<dyn QuizProgressNotifier> = if cli.quiet || !config.output.show_progress {
        Box::new(NoQuizProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(LoadingSpinner::new())
    } else {
        Box::new(SimpleProgress)
    };

    let mut repl = QuizRepl::new(session)
        .with_progress(progress)
        .with_rounds(config.quiz.rounds);

    let score = repl.run().await?;
    info!(
        "Quiz finished: {}/{} correct",
        score.correct(),
        score.answered()
    );

    Ok(())
}

/// Load configuration files, then apply command line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if cli.seed.is_some() {
        config.quiz.seed = cli.seed;
    }
    if cli.rounds.is_some() {
        config.quiz.rounds = cli.rounds;
    }

    Ok(config)
}
