//! Display symbols for the two players.

use derive_more::Display;
use minimax_tictactoe::{Cell, Player as Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Placeholder drawn for empty cells.
pub const EMPTY_SYMBOL: char = '-';

/// A single-character player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    /// Validates a symbol: exactly one character.
    ///
    /// # Errors
    ///
    /// [`SymbolError::WrongLength`] for empty or multi-character input.
    pub fn new(symbol: &str) -> Result<Self, SymbolError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(SymbolError::WrongLength {
                symbol: symbol.to_string(),
                length: symbol.chars().count(),
            }),
        }
    }

    /// The symbol character.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// Error raised when configuring symbols.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SymbolError {
    /// The symbol is not exactly one character long.
    #[display("Symbol {:?} has length {}; it must be exactly 1", symbol, length)]
    WrongLength {
        /// The rejected input.
        symbol: String,
        /// Its length in characters.
        length: usize,
    },

    /// The player number is neither 1 nor 2.
    #[display("Player number {} is invalid; it must be 1 or 2", _0)]
    UnknownPlayer(u8),
}

impl std::error::Error for SymbolError {}

/// The symbols drawn for each player. Defaults to `X` and `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    one: Symbol,
    two: Symbol,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            one: Symbol('X'),
            two: Symbol('O'),
        }
    }
}

impl Symbols {
    /// Returns the symbol for `player`.
    pub fn get(&self, player: Mark) -> Symbol {
        match player {
            Mark::One => self.one,
            Mark::Two => self.two,
        }
    }

    /// Character drawn for a cell.
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Occupied(player) => self.get(player).as_char(),
        }
    }

    /// Sets the symbol for player 1 or 2.
    ///
    /// On error nothing changes.
    ///
    /// # Errors
    ///
    /// [`SymbolError::UnknownPlayer`] or [`SymbolError::WrongLength`].
    #[instrument(skip(self))]
    pub fn set(&mut self, player_number: u8, symbol: &str) -> Result<(), SymbolError> {
        let result = Mark::from_number(player_number)
            .ok_or(SymbolError::UnknownPlayer(player_number))
            .and_then(|player| Symbol::new(symbol).map(|symbol| (player, symbol)));

        match result {
            Ok((Mark::One, symbol)) => self.one = symbol,
            Ok((Mark::Two, symbol)) => self.two = symbol,
            Err(err) => {
                warn!(error = %err, "Rejected player symbol");
                return Err(err);
            }
        }
        debug!("Player symbol updated");
        Ok(())
    }
}
