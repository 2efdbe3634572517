//! Move selection.
//!
//! [`Minimax`] is the only implemented search. [`Algorithm`] names the
//! searches a caller can ask for; asking for one that has no
//! implementation yields [`SearchError::AlgorithmUnavailable`].

mod difficulty;
mod minimax;
mod rng;

pub use difficulty::Difficulty;
pub use minimax::{Minimax, ScoredAction, top_n_action};
pub use rng::MoveRng;

use crate::action::Action;
use crate::state::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Search algorithm selector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    /// Full-depth minimax with top-N randomization.
    #[default]
    Minimax,
    /// Reserved for a pruning search. Not implemented.
    AlphaBetaPruning,
}

/// Errors raised when selecting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The requested algorithm has no implementation.
    #[display("{} search is not implemented", _0)]
    AlgorithmUnavailable(Algorithm),
}

impl std::error::Error for SearchError {}

/// Chooses a move with the process-global generator.
///
/// Returns `None` if the game is already over.
pub fn choose_move(state: &GameState, difficulty: Difficulty) -> Option<Action> {
    Minimax::new(difficulty).choose_move(state, &mut rand::rng())
}

/// Chooses a move with the given algorithm and random source.
///
/// # Errors
///
/// Returns [`SearchError::AlgorithmUnavailable`] for algorithms without an
/// implementation.
#[instrument(skip(state, rng), fields(moves = state.move_count()))]
pub fn choose_move_with<R: Rng + ?Sized>(
    algorithm: Algorithm,
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Option<Action>, SearchError> {
    match algorithm {
        Algorithm::Minimax => Ok(Minimax::new(difficulty).choose_move(state, rng)),
        Algorithm::AlphaBetaPruning => {
            warn!(%algorithm, "Requested search is not implemented");
            Err(SearchError::AlgorithmUnavailable(algorithm))
        }
    }
}
