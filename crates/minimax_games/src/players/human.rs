//! Human player reading moves from a text stream.

use super::Player;
use crate::render::render_board;
use crate::symbols::Symbols;
use anyhow::{Result, bail};
use minimax_tictactoe::{Action, GameState};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::debug;

/// Parses `row col`, `row,col` or `row, col` into an action.
///
/// Coordinates are not range-checked; the game state rejects them.
pub fn parse_action(input: &str) -> Option<Action> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::new(row, col))
}

/// Line input shared by the human players of one game.
///
/// Two players at the same terminal must read from one buffer, otherwise
/// the first reader may buffer lines meant for the second.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Human player prompting on `output` and reading lines from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    symbols: Symbols,
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player.
    pub fn new(name: impl Into<String>, symbols: Symbols, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            symbols,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn next_action(&mut self, state: &GameState) -> Result<Action> {
        let symbol = self.symbols.get(state.current_player());
        write!(self.output, "{}", render_board(state.board(), &self.symbols))?;

        loop {
            write!(self.output, "{} ({}), your move [row col]: ", self.name, symbol)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.borrow_mut().read_line(&mut line)? == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            match parse_action(&line) {
                Some(action) => {
                    debug!(player = %self.name, %action, "Human entered move");
                    return Ok(action);
                }
                None => writeln!(self.output, "Enter a row and a column, e.g. `1 2`.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
