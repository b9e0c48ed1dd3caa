//! Interactive quiz loop

use crate::ConsoleFormatter;
use crate::quiz::command::{Command, parse_command};
use crate::quiz::score::Scoreboard;
use colored::Colorize;
use guess_breed_application::{BreedProvider, NoQuizProgress, QuizProgressNotifier, QuizSession};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Terminal front end that plays rounds against a [`QuizSession`]
pub struct QuizRepl<P: BreedProvider + 'static> {
    session: QuizSession<P>,
    progress: Box<dyn QuizProgressNotifier>,
    rounds: Option<u32>,
    score: Scoreboard,
}

impl<P: BreedProvider + 'static> QuizRepl<P> {
    /// Create a new QuizRepl
    pub fn new(session: QuizSession<P>) -> Self {
        Self {
            session,
            progress: Box::new(NoQuizProgress),
            rounds: None,
            score: Scoreboard::default(),
        }
    }

    /// Set how question loads are reported
    pub fn with_progress(mut self, progress: Box<dyn QuizProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Stop after this many answered questions
    pub fn with_rounds(mut self, rounds: Option<u32>) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    /// Run the quiz on stdin
    pub async fn run(&mut self) -> io::Result<Scoreboard> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run_with_input(&mut input).await
    }

    /// Run the quiz reading commands from `input`
    ///
    /// Ends on `q`, end of input, or once the round limit is reached.
    pub async fn run_with_input(&mut self, input: &mut dyn BufRead) -> io::Result<Scoreboard> {
        println!("{}", ConsoleFormatter::welcome());

        'quiz: while !self.rounds_complete() {
            self.session
                .request_new_question_with_progress(self.progress.as_ref())
                .await;

            let Some(question) = self.session.state().question else {
                println!("{}", ConsoleFormatter::format_load_failure());
                match read_command(input, "retry>")? {
                    Some(line) if parse_command(&line, &[]) == Some(Command::Quit) => break,
                    Some(_) => continue,
                    None => break,
                }
            };

            println!(
                "{}",
                ConsoleFormatter::format_question(self.score.answered() + 1, &question)
            );

            loop {
                let Some(line) = read_command(input, "answer>")? else {
                    break 'quiz;
                };

                match parse_command(&line, question.options()) {
                    Some(Command::Answer(index)) => {
                        let chosen = &question.options()[index];
                        if let Some(outcome) = self.session.user_selected(chosen) {
                            self.score.record(&outcome);
                            println!("{}\n", ConsoleFormatter::format_outcome(&outcome));
                        }
                        break;
                    }
                    Some(Command::Quit) => break 'quiz,
                    Some(Command::Help) => println!("{}", ConsoleFormatter::help()),
                    Some(Command::Next) | None => {
                        debug!("Unrecognised answer: {:?}", line);
                        println!(
                            "Enter a number from 1 to {}, or q to quit.",
                            question.options().len()
                        );
                    }
                }
            }

            if self.rounds_complete() {
                break;
            }

            loop {
                match read_command(input, "next>")? {
                    None => break 'quiz,
                    Some(line) => match parse_command(&line, &[]) {
                        Some(Command::Quit) => break 'quiz,
                        Some(Command::Help) => println!("{}", ConsoleFormatter::help()),
                        _ => break,
                    },
                }
            }
        }

        println!("{}", ConsoleFormatter::format_summary(&self.score));
        Ok(self.score)
    }

    fn rounds_complete(&self) -> bool {
        self.rounds
            .is_some_and(|rounds| self.score.answered() >= rounds)
    }
}

/// Print `prompt` and read one trimmed line; `None` at end of input
fn read_command(input: &mut dyn BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{} ", prompt.magenta().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
