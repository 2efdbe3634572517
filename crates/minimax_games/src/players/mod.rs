//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, SharedInput, parse_action};

use anyhow::Result;
use minimax_tictactoe::{Action, GameState};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets the next move for the player to move in `state`.
    ///
    /// The returned action is applied by the caller, which reports it and
    /// asks again if it turns out to be illegal.
    fn next_action(&mut self, state: &GameState) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
