//! Console output formatter for quiz rounds

use crate::quiz::score::Scoreboard;
use colored::Colorize;
use guess_breed_domain::{QuizOutcome, QuizQuestion};

/// Formats quiz questions and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown once when the quiz starts
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("Guess the Breed"));
        output.push_str("\n\n");
        output.push_str("Open the photo link and pick the breed you see.\n\n");
        output.push_str(&Self::help());
        output
    }

    /// Command reference
    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  1-4, or a breed name  - Answer the current question\n");
        output.push_str("  Enter, n              - Next question (after answering)\n");
        output.push_str("  help, h, ?            - Show this help\n");
        output.push_str("  quit, q               - Exit the quiz\n");
        output
    }

    /// Format a question with its numbered options
    pub fn format_question(round: u32, question: &QuizQuestion) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!("Round {}", round)));
        output.push_str(&format!(
            "{} {}\n\n",
            "Photo:".cyan().bold(),
            question.image_url().as_str().underline()
        ));
        output.push_str(&format!("{}\n", "Which breed is this?".bold()));

        for (index, breed) in question.options().iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}.", index + 1).yellow().bold(),
                breed.display_name()
            ));
        }

        output
    }

    /// Format the feedback line after an answer
    pub fn format_outcome(outcome: &QuizOutcome) -> String {
        let name = outcome.correct_breed().display_name();
        match outcome {
            QuizOutcome::Correct { .. } => {
                format!("{} It's a {}. Great job!", "Correct!".green().bold(), name)
            }
            QuizOutcome::Incorrect { .. } => {
                format!("{} It's a {}. Try again!", "It's wrong.".red().bold(), name)
            }
        }
    }

    /// Message shown when a question could not be loaded
    pub fn format_load_failure() -> String {
        format!(
            "{} {}",
            "Unable to load image.".red().bold(),
            "Press Enter to retry, or q to quit.".dimmed()
        )
    }

    /// Final score summary
    pub fn format_summary(score: &Scoreboard) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Summary"));

        if score.answered() == 0 {
            output.push_str("No questions answered.\n");
        } else {
            output.push_str(&format!(
                "{} {}/{} correct ({}%)\n",
                "Score:".cyan().bold(),
                score.correct(),
                score.answered(),
                score.accuracy_percent()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(32))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(48).cyan())
    }
}
