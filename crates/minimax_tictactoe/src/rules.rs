//! Win detection for tic-tac-toe.

use crate::action::Action;
use crate::types::{Board, Cell, LineKind, Player};

/// Every line that wins the game, in evaluation order.
///
/// Diagonals come first, then columns left to right, then rows top to
/// bottom. When several lines are complete at once the first one listed
/// here is reported.
pub const LINES: [(LineKind, [Action; 3]); 8] = [
    (
        LineKind::MainDiagonal,
        [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    ),
    (
        LineKind::AntiDiagonal,
        [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
    ),
    // Columns
    (
        LineKind::Vertical,
        [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    ),
    (
        LineKind::Vertical,
        [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    ),
    (
        LineKind::Vertical,
        [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    ),
    // Rows
    (
        LineKind::Horizontal,
        [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    ),
    (
        LineKind::Horizontal,
        [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    ),
    (
        LineKind::Horizontal,
        [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    ),
];

/// Finds the first completed line on the board.
///
/// Returns the owner, the kind of line and its coordinates, or `None` if
/// no line is complete.
pub fn winning_line(board: &Board) -> Option<(Player, LineKind, [Action; 3])> {
    LINES.iter().find_map(|&(kind, line @ [a, b, c])| {
        let cell = board.get(a)?;
        match cell {
            Cell::Occupied(player) if board.get(b) == Some(cell) && board.get(c) == Some(cell) => {
                Some((player, kind, line))
            }
            _ => None,
        }
    })
}
