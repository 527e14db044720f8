//! An interactive game session.
//!
//! The session is the caller the engine expects: it turns typed commands into
//! moves, draws the board after each accepted one, and shrugs off occupied
//! cells and moves after the game has ended.

use kinarow_core::{GameEngine, GameError, GameStatus};
use thiserror::Error;
use tracing::{info, warn};

use crate::command::{Command, HELP};
use crate::render::{player_label, render_board};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Could not serialize game state: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// What to show the player after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Session {
    engine: GameEngine,
}

impl Session {
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board followed by whose turn it is or how the game ended
    pub fn describe(&self) -> String {
        let status = match self.engine.status() {
            GameStatus::InProgress => {
                format!("{} to move", player_label(self.engine.current_player()))
            }
            GameStatus::Won(player) => {
                format!("{} wins! Type `new` to play again.", player_label(player))
            }
            GameStatus::Draw => "Draw: the board is full. Type `new` to play again.".to_string(),
        };
        format!("{}\n{}", render_board(self.engine.board()), status)
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply, SessionError> {
        let text = match command {
            Command::Place { row, col } => self.place(row, col)?,
            Command::Show => self.describe(),
            Command::Moves => self.moves(),
            Command::Json => self.engine.to_json()?,
            Command::New => {
                self.engine.restart()?;
                self.describe()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn place(&mut self, row: usize, col: usize) -> Result<String, SessionError> {
        match self.engine.apply_move(row, col) {
            Ok(status) => {
                if status.is_terminal() {
                    info!(?status, moves = self.engine.history().len(), "game finished");
                }
                Ok(self.describe())
            }
            Err(GameError::CellOccupied { row, col }) => Ok(format!(
                "Cell ({}, {}) is already taken. {} still to move.",
                row,
                col,
                player_label(self.engine.current_player())
            )),
            Err(GameError::GameAlreadyOver) => {
                Ok("The game is over. Type `new` to play again.".to_string())
            }
            Err(GameError::OutOfBounds { row, col }) => {
                let board = self.engine.board();
                Ok(format!(
                    "({}, {}) is off the board: rows are 0-{}, columns are 0-{}.",
                    row,
                    col,
                    board.height() - 1,
                    board.width() - 1
                ))
            }
            Err(e) => {
                warn!(error = %e, "unexpected move failure");
                Err(e.into())
            }
        }
    }

    fn moves(&self) -> String {
        let history = self.engine.history();
        if history.is_empty() {
            return "No moves yet.".to_string();
        }
        history
            .iter()
            .map(|m| {
                format!(
                    "{:>3}. {} at ({}, {})",
                    m.turn,
                    player_label(m.player),
                    m.row,
                    m.col
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
