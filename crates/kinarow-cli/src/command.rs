//! Text commands typed at the prompt.

use std::str::FromStr;
use thiserror::Error;

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell for the player to move: `<row> <col>` or `place <row> <col>`
    Place { row: usize, col: usize },

    /// Print the board
    Show,

    /// List the moves played so far
    Moves,

    /// Print the game state as JSON
    Json,

    /// Start a new game with the same settings
    New,

    /// Print the command list
    Help,

    /// Leave
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("Expected a row and a column, e.g. `3 4`")]
    MissingCoordinate,

    #[error("`{0}` is not a valid row or column")]
    InvalidCoordinate(String),

    #[error("Unexpected input after command: `{0}`")]
    TrailingInput(String),
}

pub const HELP: &str = "\
Commands:
  <row> <col>        place a mark (also: place <row> <col>)
  show               print the board
  moves              list moves played so far
  json               print the game state as JSON
  new                start a new game
  help               show this list
  quit               leave";

fn coordinate(token: Option<&str>) -> Result<usize, CommandError> {
    let token = token.ok_or(CommandError::MissingCoordinate)?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidCoordinate(token.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let first = tokens.next().ok_or(CommandError::Empty)?;

        let command = match first.to_ascii_lowercase().as_str() {
            "place" | "p" => {
                let row = coordinate(tokens.next())?;
                let col = coordinate(tokens.next())?;
                Command::Place { row, col }
            }
            "show" | "board" => Command::Show,
            "moves" | "history" => Command::Moves,
            "json" => Command::Json,
            "new" | "restart" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ if first.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                let row = coordinate(Some(first))?;
                let col = coordinate(tokens.next())?;
                Command::Place { row, col }
            }
            _ => return Err(CommandError::Unknown(first.to_string())),
        };

        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            return Err(CommandError::TrailingInput(rest.join(" ")));
        }
        Ok(command)
    }
}
