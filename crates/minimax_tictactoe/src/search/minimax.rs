//! Full-depth minimax with a breadth-limited random pick.
//!
//! Every node scores each legal action by recursing into the opponent's
//! reply, sorts the scores (descending for Player One, ascending for Player
//! Two, ties kept in legal-action order) and picks uniformly among the first
//! N, where N comes from the [`Difficulty`]. The value passed up to the
//! parent is always the head of the sorted list.
//!
//! The pick is made at every level, not only at the root, so each inner
//! node draws from the random source too.

use super::difficulty::Difficulty;
use crate::CELL_COUNT;
use crate::action::Action;
use crate::state::GameState;
use crate::types::{Player, Score};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An action paired with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredAction {
    /// Score of the position reached by `action` under minimax play.
    pub score: Score,
    /// The scored action.
    pub action: Action,
}

/// Minimax search at a fixed difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Minimax {
    difficulty: Difficulty,
}

impl Minimax {
    /// Creates a search at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses a move for the player to move.
    ///
    /// Returns `None` if the game is already over.
    pub fn choose_move<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<Action> {
        self.search(state, rng).map(|scored| scored.action)
    }

    /// Searches from `state` and returns the root score with the selected
    /// action, or `None` if the game is already over.
    ///
    /// The state is only read; every explored position is a simulated copy.
    #[instrument(
        skip(self, state, rng),
        fields(difficulty = %self.difficulty, moves = state.move_count())
    )]
    pub fn search<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<ScoredAction> {
        if state.is_terminal() {
            debug!("No move: game already over");
            return None;
        }

        let (score, action) = match state.current_player() {
            Player::One => self.max_value(state, rng),
            Player::Two => self.min_value(state, rng),
        };

        let action = action?;
        debug!(%action, score, "Selected move");
        Some(ScoredAction { score, action })
    }

    fn max_value<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> (Score, Option<Action>) {
        if let Some(utility) = state.utility_value() {
            return (utility, None);
        }
        let mut scored = self.score_actions(state, rng, Self::min_value::<R>);
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        self.select(&scored, rng)
    }

    fn min_value<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> (Score, Option<Action>) {
        if let Some(utility) = state.utility_value() {
            return (utility, None);
        }
        let mut scored = self.score_actions(state, rng, Self::max_value::<R>);
        scored.sort_by(|a, b| a.score.cmp(&b.score));
        self.select(&scored, rng)
    }

    /// Scores every legal action by the opponent's best reply, in
    /// legal-action order.
    fn score_actions<R, F>(&self, state: &GameState, rng: &mut R, reply: F) -> Vec<ScoredAction>
    where
        R: Rng + ?Sized,
        F: Fn(&Self, &GameState, &mut R) -> (Score, Option<Action>),
    {
        let mut scored = Vec::with_capacity(CELL_COUNT.saturating_sub(state.move_count()));
        for action in state.legal_actions() {
            if let Some(next) = state.apply_simulated(action) {
                let (score, _) = reply(self, &next, &mut *rng);
                scored.push(ScoredAction { score, action });
            }
        }
        scored
    }

    /// Head score of the sorted list plus the top-N pick.
    fn select<R: Rng + ?Sized>(&self, sorted: &[ScoredAction], rng: &mut R) -> (Score, Option<Action>) {
        match sorted.first() {
            Some(best) => (best.score, top_n_action(sorted, self.difficulty, rng)),
            None => (0, None),
        }
    }
}

/// Picks uniformly among the first `difficulty.top_n()` entries of an
/// already sorted candidate list.
///
/// Returns `None` only for an empty list.
pub fn top_n_action<R: Rng + ?Sized>(
    sorted: &[ScoredAction],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Action> {
    let breadth = difficulty.top_n().min(sorted.len());
    sorted[..breadth].choose(rng).map(|scored| scored.action)
}
