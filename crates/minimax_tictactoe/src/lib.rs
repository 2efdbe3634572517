//! Pure tic-tac-toe game logic with a minimax opponent.
//!
//! The crate has two halves:
//!
//! - **State**: [`GameState`] owns the 3x3 [`Board`], derives whose turn it
//!   is from the move count, enumerates legal [`Action`]s and evaluates
//!   terminal [`Outcome`]s.
//! - **Search**: [`Minimax`] walks the full game tree over simulated copies
//!   of the state and picks a move among the top-N scored candidates, where
//!   N is set by the [`Difficulty`].
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Difficulty, GameState, Minimax, MoveRng};
//!
//! let mut state = GameState::new();
//! let mut rng = MoveRng::new(7);
//! let search = Minimax::new(Difficulty::Hard);
//!
//! while !state.is_terminal() {
//!     let action = search.choose_move(&state, &mut rng).expect("game in progress");
//!     state.apply_in_place(action).expect("search only returns legal moves");
//! }
//!
//! // Perfect play on both sides always draws.
//! assert_eq!(state.utility_value(), Some(0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod rules;
mod search;
mod state;
mod types;

pub use action::{Action, MoveError};
pub use rules::{LINES, winning_line};
pub use search::{
    Algorithm, Difficulty, Minimax, MoveRng, ScoredAction, SearchError, choose_move,
    choose_move_with, top_n_action,
};
pub use state::GameState;
pub use types::{Board, Cell, LineKind, Outcome, Player, Score};

/// Number of cells on the board, and so the maximum number of moves.
pub const CELL_COUNT: usize = 9;
