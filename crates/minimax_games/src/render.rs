//! Text rendering of the board.

use crate::symbols::Symbols;
use minimax_tictactoe::Board;

/// Renders the board as three lines of space-separated symbols.
///
/// ```
/// use minimax_games::{Symbols, render_board};
/// use minimax_tictactoe::GameState;
///
/// let board = render_board(GameState::new().board(), &Symbols::default());
/// assert_eq!(board, "- - -\n- - -\n- - -\n");
/// ```
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut result = String::new();
    for row in board.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| symbols.for_cell(*cell).to_string())
            .collect();
        result.push_str(&line.join(" "));
        result.push('\n');
    }
    result
}

/// Renders the coordinates of every cell, for players typing moves.
pub fn render_mapping() -> String {
    let mut result = String::from("Field mapping (row,col):\n");
    for row in 0..3 {
        let line: Vec<String> = (0..3).map(|col| format!("{},{}", row, col)).collect();
        result.push_str(&line.join("|"));
        result.push('\n');
    }
    result
}
