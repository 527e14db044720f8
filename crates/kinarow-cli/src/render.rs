//! Plain-text board drawing.

use kinarow_core::{Board, Cell, Mark, PlayerId};

const EMPTY_SYMBOL: char = '.';

fn digits(n: usize) -> usize {
    n.to_string().len()
}

fn symbol(cell: Cell) -> char {
    cell.owner()
        .and_then(Mark::for_player)
        .map(|mark| mark.symbol())
        .unwrap_or(EMPTY_SYMBOL)
}

/// "Player 2 (X)"
pub fn player_label(player: PlayerId) -> String {
    match Mark::for_player(player) {
        Some(mark) => format!("Player {} ({})", player, mark.symbol()),
        None => format!("Player {}", player),
    }
}

/// Draw the board with row labels down the left and column labels on top
pub fn render_board(board: &Board) -> String {
    let label_width = digits(board.height() - 1);
    let cell_width = digits(board.width() - 1);

    let mut out = " ".repeat(label_width);
    for col in 0..board.width() {
        out.push_str(&format!(" {:>w$}", col, w = cell_width));
    }

    for (row, cells) in board.rows().enumerate() {
        out.push('\n');
        out.push_str(&format!("{:>w$}", row, w = label_width));
        for &cell in cells {
            out.push_str(&format!(" {:>w$}", symbol(cell), w = cell_width));
        }
    }

    out
}
