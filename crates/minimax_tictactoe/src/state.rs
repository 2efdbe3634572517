//! Authoritative and simulated game state.

use crate::CELL_COUNT;
use crate::action::{Action, MoveError};
use crate::rules::winning_line;
use crate::types::{Board, Cell, Outcome, Player, Score};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Complete game state: the board, the number of moves made and, once a
/// game has been timed, its wall-clock duration.
///
/// The state is `Copy`, so every simulated successor is an independent
/// value; nothing a search does to a copy can reach the original.
///
/// Only serialized, never deserialized: a state is always reached by
/// applying legal moves, which keeps the mark counts consistent with
/// `move_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Moves made so far (0-9).
    move_count: usize,
    /// Duration of the finished game, for reporting only.
    elapsed: Option<Duration>,
}

impl GameState {
    /// Creates a new game: empty board, no moves made.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a sequence of actions from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument(skip(actions), fields(moves = actions.len()))]
    pub fn from_actions(actions: &[Action]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &action in actions {
            state.check(action)?;
            state.place(action);
        }
        Ok(state)
    }

    /// Resets the board, the move count and the elapsed time in place.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of moves made.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the cell at `action`, or `None` if out of range.
    pub fn cell(&self, action: Action) -> Option<Cell> {
        self.board.get(action)
    }

    /// Duration of the game, if one was recorded.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Records the duration of the game. Search never reads it.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    /// Player to move: One on even move counts, Two on odd.
    pub fn current_player(&self) -> Player {
        if self.move_count % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is part of the contract: search breaks score ties by it.
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.board.is_empty(action))
            .collect()
    }

    /// Checks that `action` names an empty cell on the board.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] or [`MoveError::CellOccupied`].
    pub fn check(&self, action: Action) -> Result<(), MoveError> {
        match self.board.get(action) {
            None => Err(MoveError::OutOfRange(action)),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(action)),
            Some(Cell::Empty) => Ok(()),
        }
    }

    /// Marks `action` for the current player and advances the move count.
    ///
    /// An illegal action is logged and returned as an error; the state is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the cell is out of range or occupied.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn apply_in_place(&mut self, action: Action) -> Result<(), MoveError> {
        if let Err(err) = self.check(action) {
            warn!(error = %err, "Rejected illegal move");
            return Err(err);
        }
        self.place(action);
        debug!(moves = self.move_count, "Move applied");
        Ok(())
    }

    /// Returns a copy of the state with `action` applied, leaving `self`
    /// untouched. Returns `None` if the action is illegal.
    pub fn apply_simulated(&self, action: Action) -> Option<GameState> {
        if let Err(err) = self.check(action) {
            debug!(error = %err, "Illegal simulated move");
            return None;
        }
        let mut next = *self;
        next.place(action);
        Some(next)
    }

    /// Evaluates the board.
    ///
    /// Lines are checked main diagonal, anti-diagonal, columns, rows; a full
    /// board without a line is a draw.
    pub fn evaluate_terminal(&self) -> Outcome {
        if let Some((player, kind, line)) = winning_line(&self.board) {
            return Outcome::Win { player, kind, line };
        }
        if self.move_count == CELL_COUNT {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.evaluate_terminal().is_terminal()
    }

    /// `Some(1)` if Player One won, `Some(-1)` if Player Two won, `Some(0)`
    /// for a draw, `None` while the game is in progress.
    pub fn utility_value(&self) -> Option<Score> {
        self.evaluate_terminal().utility()
    }

    fn place(&mut self, action: Action) {
        self.board.set(action, Cell::Occupied(self.current_player()));
        self.move_count += 1;
    }
}
