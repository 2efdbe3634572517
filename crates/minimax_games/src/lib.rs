//! Command-line tic-tac-toe against a minimax opponent.
//!
//! The game logic and search live in [`minimax_tictactoe`]; this crate
//! adds everything around a game:
//!
//! - [`GameConfig`] loaded from TOML and merged with the [`Cli`] flags
//! - [`Symbols`] and text rendering of the board
//! - [`Player`] implementations for humans and the computer
//! - the [`Orchestrator`] game loop and the post-game [`Insights`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod insights;
pub mod orchestrator;
pub mod players;
pub mod render;
pub mod session;
pub mod symbols;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use insights::{GameReport, InsightError, InsightOptions, Insights};
pub use orchestrator::{MoveRecord, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player, SharedInput, parse_action};
pub use render::{render_board, render_mapping};
pub use session::{Matchup, Settings, play};
pub use symbols::{EMPTY_SYMBOL, Symbol, SymbolError, Symbols};
