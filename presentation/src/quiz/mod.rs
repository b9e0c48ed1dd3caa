//! Terminal quiz

pub mod command;
pub mod repl;
pub mod score;
