use color_eyre::eyre::{Result, eyre};
use facelet_core::{Face, Move};

/// A line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Moves(Vec<Move>),
    Scramble,
    Solve,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Keys u d f b l r turn a face clockwise, U D F B L R counter-clockwise.
Several keys may be typed on one line, e.g. `rUfF`.
Commands: scramble, solve, reset, help, quit";

/// Lowercase face letters turn clockwise, uppercase counter-clockwise.
pub fn key_to_move(key: char) -> Option<Move> {
    let face = Face::from_letter(key.to_ascii_uppercase())?;
    Some(Move::new(face, key.is_ascii_lowercase()))
}

/// Parse one line of input. A line with any unknown key performs nothing.
pub fn parse_line(line: &str) -> Result<Command> {
    let line = line.trim();
    match line {
        "scramble" => return Ok(Command::Scramble),
        "solve" => return Ok(Command::Solve),
        "reset" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    line.chars()
        .filter(|key| !key.is_whitespace())
        .map(|key| {
            key_to_move(key)
                .ok_or_else(|| eyre!("Unknown key `{key}`, type `help` for the key bindings"))
        })
        .collect::<Result<Vec<_>>>()
        .map(Command::Moves)
}
