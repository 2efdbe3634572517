//! Post-game report.

use crate::orchestrator::MoveRecord;
use crate::symbols::Symbols;
use derive_getters::Getters;
use derive_more::Display;
use minimax_tictactoe::{Action, GameState, LineKind, Outcome, Player as Mark};
use serde::Serialize;
use std::time::Duration;
use tracing::{instrument, warn};

/// Error returned when insights are requested too early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InsightError {
    /// The game has not reached a terminal state.
    #[display("The game is not over yet ({} moves played); no insights available", moves)]
    GameNotOver {
        /// Moves played so far.
        moves: usize,
    },
}

impl std::error::Error for InsightError {}

/// Which sections [`Insights::render`] prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightOptions {
    /// Match result and move count.
    pub result: bool,
    /// Winner symbol and winning coordinates.
    pub winner: bool,
    /// Game duration.
    pub duration: bool,
}

impl Default for InsightOptions {
    fn default() -> Self {
        Self {
            result: true,
            winner: true,
            duration: true,
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Insights {
    outcome: Outcome,
    moves: usize,
    winner: Option<Mark>,
    winning_line: Option<[Action; 3]>,
    elapsed: Option<Duration>,
}

impl Insights {
    /// Collects insights from a terminal state.
    ///
    /// # Errors
    ///
    /// [`InsightError::GameNotOver`] while the game is still in progress.
    #[instrument(skip(state), fields(moves = state.move_count()))]
    pub fn from_state(state: &GameState) -> Result<Self, InsightError> {
        let outcome = state.evaluate_terminal();
        if !outcome.is_terminal() {
            let err = InsightError::GameNotOver {
                moves: state.move_count(),
            };
            warn!(error = %err, "Insights requested early");
            return Err(err);
        }

        Ok(Self {
            outcome,
            moves: state.move_count(),
            winner: outcome.winner(),
            winning_line: outcome.winning_line(),
            elapsed: state.elapsed(),
        })
    }

    /// Upper-case label of the result, e.g. `ANTI-DIAGONAL WIN`.
    pub fn result_label(&self) -> &'static str {
        match self.outcome.line_kind() {
            None => "DRAW",
            Some(LineKind::Horizontal) => "HORIZONTAL WIN",
            Some(LineKind::Vertical) => "VERTICAL WIN",
            Some(LineKind::MainDiagonal) => "MAIN DIAGONAL WIN",
            Some(LineKind::AntiDiagonal) => "ANTI-DIAGONAL WIN",
        }
    }

    /// Renders the selected sections, one per line.
    pub fn render(&self, symbols: &Symbols, options: InsightOptions) -> String {
        let mut out = String::new();

        if options.result {
            out.push_str(&format!("Match result: {}\n", self.result_label()));
            out.push_str(&format!("Done moves: {}\n", self.moves));
        }

        if options.winner
            && let (Some(winner), Some(line)) = (self.winner, self.winning_line)
        {
            let coords: Vec<String> = line.iter().map(Action::to_string).collect();
            out.push_str(&format!("The winner is: {}\n", symbols.get(winner)));
            out.push_str(&format!("Winner coordinates: [{}]\n", coords.join(", ")));
        }

        if options.duration
            && let Some(elapsed) = self.elapsed
        {
            out.push_str(&format!("Game duration: {}ms\n", elapsed.as_millis()));
        }

        out
    }
}

/// Machine-readable record of one game, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    /// Summary of the result.
    pub insights: Insights,
    /// Every applied move in order.
    pub history: Vec<MoveRecord>,
    /// Seeds of the computer players, in player order.
    pub seeds: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(coords: &[(usize, usize)]) -> GameState {
        let actions: Vec<Action> = coords.iter().copied().map(Action::from).collect();
        GameState::from_actions(&actions).unwrap()
    }

    #[test]
    fn test_in_progress_is_rejected() {
        let state = replay(&[(0, 0), (1, 1)]);
        assert_eq!(
            Insights::from_state(&state),
            Err(InsightError::GameNotOver { moves: 2 })
        );
    }

    #[test]
    fn test_anti_diagonal_report() {
        let mut state = replay(&[(0, 0), (0, 2), (0, 1), (1, 1), (1, 0), (2, 0)]);
        state.set_elapsed(Duration::from_millis(42));

        let insights = Insights::from_state(&state).unwrap();
        assert_eq!(*insights.winner(), Some(Mark::Two));
        assert_eq!(
            insights.render(&Symbols::default(), InsightOptions::default()),
            "Match result: ANTI-DIAGONAL WIN\n\
             Done moves: 6\n\
             The winner is: O\n\
             Winner coordinates: [(0, 2), (1, 1), (2, 0)]\n\
             Game duration: 42ms\n"
        );
    }

    #[test]
    fn test_draw_report_skips_winner() {
        let state = replay(&[
            (0, 0),
            (1, 1),
            (0, 1),
            (0, 2),
            (2, 0),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 2),
        ]);
        let insights = Insights::from_state(&state).unwrap();
        assert_eq!(insights.result_label(), "DRAW");
        assert_eq!(
            insights.render(&Symbols::default(), InsightOptions::default()),
            "Match result: DRAW\nDone moves: 9\n"
        );
    }

    #[test]
    fn test_sections_toggle() {
        let state = replay(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let insights = Insights::from_state(&state).unwrap();
        let options = InsightOptions {
            result: false,
            winner: true,
            duration: false,
        };
        assert_eq!(
            insights.render(&Symbols::default(), options),
            "The winner is: X\nWinner coordinates: [(0, 0), (0, 1), (0, 2)]\n"
        );
    }
}
