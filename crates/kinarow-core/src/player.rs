//! How each player is drawn.
//!
//! The engine only knows players by number. Renderers use [`Mark`] and
//! [`PlayerColor`] so that every front end draws player 1 as a navy circle,
//! player 2 as a maroon cross, and so on.

use crate::board::PlayerId;
use serde::{Deserialize, Serialize};

/// Shape drawn in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Circle,
    Cross,
    Square,
    Triangle,
}

impl Mark {
    /// Get the mark for a player id (1-4)
    pub fn for_player(id: PlayerId) -> Option<Self> {
        match id {
            1 => Some(Mark::Circle),
            2 => Some(Mark::Cross),
            3 => Some(Mark::Square),
            4 => Some(Mark::Triangle),
            _ => None,
        }
    }

    /// Single character for text rendering
    pub fn symbol(&self) -> char {
        match self {
            Mark::Circle => 'O',
            Mark::Cross => 'X',
            Mark::Square => '#',
            Mark::Triangle => '^',
        }
    }

    pub fn color(&self) -> PlayerColor {
        match self {
            Mark::Circle => PlayerColor::NavyBlue,
            Mark::Cross => PlayerColor::Maroon,
            Mark::Square => PlayerColor::Green,
            Mark::Triangle => PlayerColor::Purple,
        }
    }
}

/// Player color for UI rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    NavyBlue,
    Maroon,
    Green,
    Purple,
}

impl PlayerColor {
    /// Get hex color code for rendering
    pub fn hex_code(&self) -> u32 {
        match self {
            PlayerColor::NavyBlue => 0x000080,
            PlayerColor::Maroon => 0x800000,
            PlayerColor::Green => 0x008000,
            PlayerColor::Purple => 0x800080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_for_players() {
        let symbols: Vec<char> = (1..=4)
            .filter_map(Mark::for_player)
            .map(|m| m.symbol())
            .collect();
        assert_eq!(symbols, vec!['O', 'X', '#', '^']);
        assert_eq!(Mark::for_player(0), None);
        assert_eq!(Mark::for_player(5), None);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Mark::Circle.color().hex_code(), 0x000080);
        assert_eq!(Mark::Triangle.color(), PlayerColor::Purple);
    }
}
