//! Parsing of lines typed at the quiz prompt

use guess_breed_domain::Breed;

/// A command entered at the quiz prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick the option at this zero-based index
    Answer(usize),
    /// Move on to the next question
    Next,
    Help,
    Quit,
}

/// Parse a prompt line against the options currently on screen
///
/// Options are chosen by their 1-based number or by breed name. Returns
/// `None` for anything unrecognised.
pub fn parse_command(line: &str, options: &[Breed]) -> Option<Command> {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "" | "n" | "next" => return Some(Command::Next),
        "q" | "quit" | "exit" | "/q" | "/quit" | "/exit" => return Some(Command::Quit),
        "h" | "help" | "?" | "/h" | "/help" | "/?" => return Some(Command::Help),
        _ => {}
    }

    if let Ok(number) = input.parse::<usize>() {
        return (1..=options.len())
            .contains(&number)
            .then(|| Command::Answer(number - 1));
    }

    let breed = Breed::new(&input).ok()?;
    options
        .iter()
        .position(|option| *option == breed)
        .map(Command::Answer)
}
