//! Core game state machine.
//!
//! This module contains the `GameEngine` that owns one game's board and turn
//! state, the `GameStatus` it reports after every move, and the crate-wide
//! `GameError` type.

use crate::actions::{Move, MoveRecord};
use crate::board::{Board, PlayerId};
use crate::config::GameConfig;
use crate::turn::TurnSequencer;
use crate::win::{WinDetector, WinningLine};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Game status after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted
    InProgress,
    /// A player completed a line
    Won(PlayerId),
    /// Every cell is marked and nobody won
    Draw,
}

impl GameStatus {
    /// `Won` and `Draw` are terminal: no further moves are accepted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Errors that can occur when building or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid player count {0} (must be 2-4)")]
    InvalidPlayerCount(u8),

    #[error("Invalid win length {win_length} for a {width}x{height} board")]
    InvalidWinLength {
        win_length: usize,
        width: usize,
        height: usize,
    },

    #[error("Position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },

    #[error("Invalid player id {0}")]
    InvalidPlayer(u8),

    #[error("Cell size must be positive")]
    InvalidCellSize,

    #[error("Game is over")]
    GameAlreadyOver,
}

impl GameError {
    /// Errors a caller can shrug off and keep playing (or stop) without
    /// treating the game as broken
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::CellOccupied { .. } | GameError::GameAlreadyOver)
    }
}

/// The state of one game, from the first move to a terminal status
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    turns: TurnSequencer,
    detector: WinDetector,
    status: GameStatus,
    history: Vec<MoveRecord>,
    winning_line: Option<WinningLine>,
}

impl GameEngine {
    /// Create a new game: empty board, player 1 to move
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let board = Board::new(config.width, config.height)?;
        let turns = TurnSequencer::new(config.player_count)?;
        let detector = WinDetector::new(config.win_length, config.width, config.height)?;

        Ok(Self {
            config,
            board,
            turns,
            detector,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        })
    }

    /// Mark `(row, col)` for the current player.
    ///
    /// On error nothing changes: the same player is still to move. A move that
    /// both completes a line and fills the board is a win.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            debug!(row, col, status = ?self.status, "move rejected, game is over");
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.turns.current();
        if let Err(e) = self.board.set(row, col, player) {
            debug!(row, col, player, error = %e, "move rejected");
            return Err(e);
        }

        let turn = self.history.len() + 1;
        self.history.push(MoveRecord {
            player,
            row,
            col,
            turn,
        });
        debug!(row, col, player, turn, "mark placed");

        if self.detector.check(&self.board, row, col)? {
            self.status = GameStatus::Won(player);
            self.winning_line = self.detector.winning_line(&self.board, row, col)?;
            info!(player, turn, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(turn, "game drawn");
        } else {
            self.turns.advance();
        }

        Ok(self.status)
    }

    /// Apply a [`Move`]
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.apply_move(mv.row, mv.col)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board; only the engine places marks
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move (after a win, the winner)
    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    /// Accepted moves in order
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// The completed line once the game is won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Every legal move; empty once the game is over
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board
            .empty_cells()
            .into_iter()
            .map(Move::from)
            .collect()
    }

    /// Throw away this game and start a fresh one with the same config
    pub fn restart(&mut self) -> Result<(), GameError> {
        *self = Self::new(self.config)?;
        info!(
            width = self.config.width,
            height = self.config.height,
            "new game started"
        );
        Ok(())
    }

    /// Plain-data copy of the game for serialization
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            status: self.status,
            current_player: self.turns.current(),
            board: self
                .board
                .rows()
                .map(|row| row.iter().map(|cell| cell.value()).collect())
                .collect(),
            history: self.history.clone(),
            winning_line: self.winning_line.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }
}

/// JSON-friendly game state: board rows hold numeric occupants (0 = empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub status: GameStatus,
    pub current_player: PlayerId,
    pub board: Vec<Vec<u8>>,
    pub history: Vec<MoveRecord>,
    pub winning_line: Option<WinningLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::win::Axis;
    use pretty_assertions::assert_eq;

    fn play_all(engine: &mut GameEngine, moves: &[(usize, usize)]) -> GameStatus {
        let mut status = engine.status();
        for &(row, col) in moves {
            status = engine.apply_move(row, col).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_player(), 1);
        assert_eq!(engine.board().marked_count(), 0);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            GameEngine::new(GameConfig::new(3, 3, 3, 1)).unwrap_err(),
            GameError::InvalidPlayerCount(1)
        );
        assert_eq!(
            GameEngine::new(GameConfig::new(3, 0, 3, 2)).unwrap_err(),
            GameError::InvalidDimensions {
                width: 3,
                height: 0
            }
        );
        assert!(matches!(
            GameEngine::new(GameConfig::new(5, 3, 4, 2)),
            Err(GameError::InvalidWinLength { .. })
        ));
    }

    #[test]
    fn test_huge_board_is_an_error_not_a_panic() {
        assert_eq!(
            GameEngine::new(GameConfig::new(1 << 31, 1 << 31, 5, 2)).unwrap_err(),
            GameError::InvalidDimensions {
                width: 1 << 31,
                height: 1 << 31
            }
        );
    }

    #[test]
    fn test_move_advances_turn() {
        let mut engine = GameEngine::new(GameConfig::new(4, 4, 3, 3)).unwrap();
        assert_eq!(engine.apply_move(0, 0), Ok(GameStatus::InProgress));
        assert_eq!(engine.current_player(), 2);
        assert_eq!(engine.apply_move(3, 3), Ok(GameStatus::InProgress));
        assert_eq!(engine.current_player(), 3);
        assert_eq!(engine.apply_move(2, 0), Ok(GameStatus::InProgress));
        assert_eq!(engine.current_player(), 1);
        assert_eq!(engine.board().get(3, 3).unwrap(), Cell::Marked(2));
    }

    #[test]
    fn test_occupied_cell_costs_no_turn() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        engine.apply_move(1, 1).unwrap();
        assert_eq!(
            engine.apply_move(1, 1),
            Err(GameError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(engine.current_player(), 2);
        assert_eq!(engine.board().get(1, 1).unwrap(), Cell::Marked(1));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_changes_nothing() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        assert_eq!(
            engine.apply_move(0, 3),
            Err(GameError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(engine.current_player(), 1);
        assert!(engine.history().is_empty());
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_win_does_not_advance_turn() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        // 1 takes the top row while 2 plays the middle row
        let status = play_all(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(status, GameStatus::Won(1));
        assert_eq!(engine.current_player(), 1);
        assert!(engine.is_over());
        assert!(engine.valid_moves().is_empty());
        assert_eq!(
            engine.winning_line().map(|line| line.axis),
            Some(Axis::Horizontal)
        );
    }

    #[test]
    fn test_draw_on_last_cell() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        // Final board:
        // 1 2 1
        // 1 2 2
        // 2 1 1
        let moves = [
            (0, 0),
            (1, 1),
            (0, 2),
            (0, 1),
            (2, 1),
            (1, 2),
            (1, 0),
            (2, 0),
        ];
        assert_eq!(play_all(&mut engine, &moves), GameStatus::InProgress);
        assert_eq!(engine.apply_move(2, 2), Ok(GameStatus::Draw));
        assert!(engine.winning_line().is_none());
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        // Final board:
        // 1 2 1
        // 2 1 2
        // 2 1 1
        let moves = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
        ];
        assert_eq!(play_all(&mut engine, &moves), GameStatus::InProgress);
        assert_eq!(engine.apply_move(2, 2), Ok(GameStatus::Won(1)));
        assert!(engine.board().is_full());
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        play_all(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let before = engine.snapshot();

        assert_eq!(engine.apply_move(2, 2), Err(GameError::GameAlreadyOver));
        assert_eq!(engine.apply_move(0, 0), Err(GameError::GameAlreadyOver));
        assert_eq!(engine.apply_move(9, 9), Err(GameError::GameAlreadyOver));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_restart_clears_game() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        play_all(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        engine.restart().unwrap();

        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_player(), 1);
        assert!(engine.history().is_empty());
        assert!(engine.winning_line().is_none());
        assert_eq!(engine.board().marked_count(), 0);
        assert_eq!(engine.config(), &GameConfig::tic_tac_toe());
    }

    #[test]
    fn test_history_records_turns() {
        let mut engine = GameEngine::new(GameConfig::tic_tac_toe()).unwrap();
        engine.play(Move::new(2, 2)).unwrap();
        let _ = engine.apply_move(2, 2);
        engine.play(Move::new(0, 1)).unwrap();

        assert_eq!(
            engine.history(),
            &[
                MoveRecord {
                    player: 1,
                    row: 2,
                    col: 2,
                    turn: 1
                },
                MoveRecord {
                    player: 2,
                    row: 0,
                    col: 1,
                    turn: 2
                },
            ]
        );
        assert_eq!(engine.last_move().map(|m| m.position()), Some(Move::new(0, 1)));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(GameError::CellOccupied { row: 0, col: 0 }.is_recoverable());
        assert!(GameError::GameAlreadyOver.is_recoverable());
        assert!(!GameError::OutOfBounds { row: 0, col: 0 }.is_recoverable());
        assert!(!GameError::InvalidPlayerCount(9).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::CellOccupied { row: 2, col: 1 }.to_string(),
            "Cell (2, 1) is already taken"
        );
        assert_eq!(
            GameError::InvalidWinLength {
                win_length: 6,
                width: 5,
                height: 5
            }
            .to_string(),
            "Invalid win length 6 for a 5x5 board"
        );
    }

    #[test]
    fn test_snapshot_json() {
        let mut engine = GameEngine::new(GameConfig::new(3, 3, 3, 2)).unwrap();
        engine.apply_move(0, 1).unwrap();
        let json = engine.to_json().unwrap();
        let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot.board, vec![vec![0, 1, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(snapshot.current_player, 2);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot, engine.snapshot());
    }
}
