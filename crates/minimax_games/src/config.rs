//! Game configuration loaded from TOML.

use crate::symbols::{SymbolError, Symbols};
use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::{Algorithm, Difficulty};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a session of games.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol drawn for player 1.
    #[serde(default = "default_player_one_symbol")]
    player_one_symbol: String,

    /// Symbol drawn for player 2.
    #[serde(default = "default_player_two_symbol")]
    player_two_symbol: String,

    /// Computer difficulty. Unrecognized labels play optimally.
    #[serde(
        default = "default_difficulty",
        deserialize_with = "lenient_difficulty"
    )]
    difficulty: Difficulty,

    /// Search algorithm for computer players.
    #[serde(default)]
    algorithm: Algorithm,

    /// Print the board after every move.
    #[serde(default = "default_print_moves")]
    print_moves: bool,

    /// Seed for computer players; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_player_one_symbol() -> String {
    "X".to_string()
}

fn default_player_two_symbol() -> String {
    "O".to_string()
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

fn default_print_moves() -> bool {
    true
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(Difficulty::from_label(&label))
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_symbol: default_player_one_symbol(),
            player_two_symbol: default_player_two_symbol(),
            difficulty: default_difficulty(),
            algorithm: Algorithm::default(),
            print_moves: default_print_moves(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds player symbols from the configured strings.
    ///
    /// Each symbol is applied on its own. A rejected one keeps the default
    /// for that player and is returned alongside the symbols.
    pub fn build_symbols(&self) -> (Symbols, Vec<SymbolError>) {
        let mut symbols = Symbols::default();
        let rejected = [(1, &self.player_one_symbol), (2, &self.player_two_symbol)]
            .into_iter()
            .filter_map(|(number, symbol)| symbols.set(number, symbol).err())
            .collect();
        (symbols, rejected)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
