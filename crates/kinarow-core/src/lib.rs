//! Kinarow - a generalized k-in-a-row game engine
//!
//! This crate provides the core game logic for "k-in-a-row" games played on an
//! m x n grid by two to four players, including:
//! - Board representation with bounds and occupancy checks
//! - Turn rotation among the configured players
//! - Win detection anchored at the most recently placed mark
//! - Game state machine with full rule enforcement
//!
//! Tic-tac-toe is the 3x3, 3-in-a-row case; gomoku is the 15x15 (or larger),
//! 5-in-a-row case.
//!
//! # Architecture
//!
//! The engine is synchronous and owns all of its state. It never renders
//! anything and never reads input devices; a caller (terminal, browser, GUI)
//! converts its input into `(row, col)` coordinates, calls
//! [`GameEngine::apply_move`], and branches on the returned [`GameStatus`].
//! It can be compiled to:
//! - Native Rust for terminal or server hosts
//! - WebAssembly for a browser front end (feature `wasm`)
//!
//! # Modules
//!
//! - [`board`]: Grid cells and placement
//! - [`turn`]: Whose turn it is
//! - [`win`]: Line detection through an anchor cell
//! - [`game`]: Game state machine and error type
//! - [`config`]: Game configuration and presets
//! - [`actions`]: Moves and move history records
//! - [`player`]: Marks and colours for rendering each player
//! - [`layout`]: Pixel to grid coordinate mapping for graphical callers

pub mod actions;
pub mod board;
pub mod config;
pub mod game;
pub mod layout;
pub mod player;
pub mod turn;
pub mod win;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{Move, MoveRecord};
pub use board::{Board, Cell, PlayerId, MAX_PLAYERS};
pub use config::GameConfig;
pub use game::{GameEngine, GameError, GameSnapshot, GameStatus};
pub use layout::CellGeometry;
pub use player::{Mark, PlayerColor};
pub use turn::TurnSequencer;
pub use win::{Axis, WinDetector, WinningLine};
