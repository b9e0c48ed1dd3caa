//! Loading indicators for question fetches

use colored::Colorize;
use guess_breed_application::QuizProgressNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a question loads
pub struct LoadingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl LoadingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for LoadingSpinner {
    fn on_load_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Fetching a dog...");
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Some(previous) = self.bar.lock().unwrap().replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn on_load_complete(&self, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(format!("{}", "x".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QuizProgressNotifier for SimpleProgress {
    fn on_load_start(&self) {
        println!("{} Fetching a dog...", "->".cyan());
    }

    fn on_load_complete(&self, _success: bool) {}
}
