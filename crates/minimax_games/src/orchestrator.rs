//! Game orchestration between players.

use crate::players::Player;
use crate::render::render_board;
use crate::symbols::Symbols;
use anyhow::Result;
use minimax_tictactoe::{Action, GameState, Player as Mark};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// One applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub number: usize,
    /// Side that moved.
    pub player: Mark,
    /// Display name of the player.
    pub name: String,
    /// Cell that was marked.
    pub action: Action,
}

/// Orchestrates gameplay between two players.
///
/// Each turn the side to move is asked for an action, which is applied to
/// the authoritative state. Illegal actions are reported on the output and
/// the same side is asked again.
pub struct Orchestrator<W> {
    state: GameState,
    player_one: Box<dyn Player>,
    player_two: Box<dyn Player>,
    symbols: Symbols,
    print_moves: bool,
    output: W,
    history: Vec<MoveRecord>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(
        player_one: Box<dyn Player>,
        player_two: Box<dyn Player>,
        symbols: Symbols,
        output: W,
    ) -> Self {
        Self {
            state: GameState::new(),
            player_one,
            player_two,
            symbols,
            print_moves: false,
            output,
            history: Vec::new(),
        }
    }

    /// Prints the board after every move.
    pub fn with_print_moves(mut self, print_moves: bool) -> Self {
        self.print_moves = print_moves;
        self
    }

    /// Runs the game loop until the game ends.
    ///
    /// The wall-clock duration of the game is recorded on the state.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or the output cannot be
    /// written. Illegal moves are not errors.
    #[instrument(skip(self), fields(player_one = %self.player_one.name(), player_two = %self.player_two.name()))]
    pub fn run(&mut self) -> Result<&GameState> {
        info!("Starting game orchestration");
        let started = Instant::now();

        while !self.state.is_terminal() {
            let mark = self.state.current_player();
            let player = match mark {
                Mark::One => &mut self.player_one,
                Mark::Two => &mut self.player_two,
            };

            debug!(player = %player.name(), "Waiting for move");
            let action = player.next_action(&self.state)?;
            let name = player.name().to_string();

            if let Err(err) = self.state.apply_in_place(action) {
                warn!(player = %name, error = %err, "Illegal move, asking again");
                writeln!(self.output, "Illegal move by {}: {}", name, err)?;
                continue;
            }

            self.history.push(MoveRecord {
                number: self.state.move_count(),
                player: mark,
                name,
                action,
            });

            if self.print_moves {
                writeln!(self.output, "----- Move: #{} -----", self.state.move_count())?;
                write!(self.output, "{}", render_board(self.state.board(), &self.symbols))?;
            }
        }

        self.state.set_elapsed(started.elapsed());
        info!(
            outcome = ?self.state.evaluate_terminal(),
            moves = self.state.move_count(),
            "Game finished"
        );
        Ok(&self.state)
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Display name of the player controlling `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::One => self.player_one.name(),
            Mark::Two => self.player_two.name(),
        }
    }

    /// Restarts the game, keeping players and settings.
    pub fn restart(&mut self) {
        self.state.restart();
        self.history.clear();
    }

    /// Consumes the orchestrator and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
