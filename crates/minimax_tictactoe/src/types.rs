//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Utility of a terminal state from Player One's point of view.
///
/// `1` is a win for [`Player::One`], `-1` a win for [`Player::Two`], `0` a draw.
pub type Score = i8;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Moves first, on even move indices. Maximizes the score.
    One,
    /// Moves second, on odd move indices. Minimizes the score.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player's number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks up a player by number (1 or 2).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Utility of a win by this player.
    pub fn utility(self) -> Score {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given action's coordinates.
    ///
    /// Returns `None` when the coordinates fall outside the grid.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row())
            .and_then(|row| row.get(action.col()))
            .copied()
    }

    /// Checks if a cell is in range and empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Counts all non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Writes a cell. Callers are responsible for bounds and turn order.
    pub(crate) fn set(&mut self, action: Action, cell: Cell) {
        self.cells[action.row()][action.col()] = cell;
    }
}

/// Direction of a completed line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum LineKind {
    /// A full row.
    Horizontal,
    /// A full column.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Terminal evaluation of a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// All nine cells are filled without a completed line.
    Draw,
    /// A player completed a line.
    Win {
        /// Owner of the completed line.
        player: Player,
        /// Direction of the line.
        kind: LineKind,
        /// Coordinates of the line in scan order.
        line: [Action; 3],
    },
}

impl Outcome {
    /// Returns true for `Draw` and `Win`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the kind of the winning line, if any.
    pub fn line_kind(&self) -> Option<LineKind> {
        match self {
            Outcome::Win { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the winning coordinates, if any.
    pub fn winning_line(&self) -> Option<[Action; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Utility of this outcome, `None` while the game is in progress.
    pub fn utility(&self) -> Option<Score> {
        match self {
            Outcome::InProgress => None,
            Outcome::Draw => Some(0),
            Outcome::Win { player, .. } => Some(player.utility()),
        }
    }
}
