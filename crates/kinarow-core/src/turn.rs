//! Turn rotation among the configured players.

use crate::board::{PlayerId, MAX_PLAYERS};
use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Fewest players a game supports
pub const MIN_PLAYERS: u8 = 2;

/// Tracks whose turn it is. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSequencer {
    current: PlayerId,
    player_count: u8,
}

impl TurnSequencer {
    pub fn new(player_count: u8) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount(player_count));
        }
        Ok(Self {
            current: 1,
            player_count,
        })
    }

    /// The player to move
    pub fn current(&self) -> PlayerId {
        self.current
    }

    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    /// Pass the turn to the next player, wrapping back to player 1
    pub fn advance(&mut self) {
        self.current = self.current % self.player_count + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_player_one() {
        let turns = TurnSequencer::new(4).unwrap();
        assert_eq!(turns.current(), 1);
        assert_eq!(turns.player_count(), 4);
    }

    #[test]
    fn test_three_players_rotate() {
        let mut turns = TurnSequencer::new(3).unwrap();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(turns.current());
            turns.advance();
        }
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_two_players_alternate() {
        let mut turns = TurnSequencer::new(2).unwrap();
        turns.advance();
        assert_eq!(turns.current(), 2);
        turns.advance();
        assert_eq!(turns.current(), 1);
    }

    #[test]
    fn test_player_count_bounds() {
        assert_eq!(TurnSequencer::new(1), Err(GameError::InvalidPlayerCount(1)));
        assert_eq!(TurnSequencer::new(5), Err(GameError::InvalidPlayerCount(5)));
        assert_eq!(TurnSequencer::new(0), Err(GameError::InvalidPlayerCount(0)));
        assert!(TurnSequencer::new(2).is_ok());
    }
}
