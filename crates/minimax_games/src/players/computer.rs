//! Computer player backed by the minimax search.

use super::Player;
use anyhow::Result;
use minimax_tictactoe::{Action, Algorithm, Difficulty, GameState, MoveRng, choose_move_with};
use tracing::debug;

/// Computer player that asks the search for every move.
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    algorithm: Algorithm,
    rng: MoveRng,
}

impl ComputerPlayer {
    /// Creates a computer player.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, rng: MoveRng) -> Self {
        Self {
            name: name.into(),
            difficulty,
            algorithm: Algorithm::default(),
            rng,
        }
    }

    /// Uses a different search algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Seed of this player's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Player for ComputerPlayer {
    fn next_action(&mut self, state: &GameState) -> Result<Action> {
        debug!(cpu = %self.name, difficulty = %self.difficulty, "CPU making move");

        let action = choose_move_with(self.algorithm, state, self.difficulty, &mut self.rng)?
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(cpu = %self.name, %action, "CPU chose position");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
