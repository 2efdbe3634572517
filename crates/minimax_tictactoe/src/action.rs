//! Moves on the board and the errors raised when applying them.

use serde::{Deserialize, Serialize};

/// A move: the (row, column) of the cell to mark.
///
/// An action is only meaningful against the state it was generated from;
/// once the state advances the cell may no longer be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// All nine cells in row-major order: top to bottom, left to right.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action. Coordinates are not range-checked here.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index, top to bottom.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, left to right.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether both coordinates are in `0..3`.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Action {} is outside the board", _0)]
    OutOfRange(Action),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Action),
}

impl MoveError {
    /// The action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            MoveError::OutOfRange(action) | MoveError::CellOccupied(action) => *action,
        }
    }
}

impl std::error::Error for MoveError {}
