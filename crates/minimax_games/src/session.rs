//! Resolves settings and runs one game between the chosen players.

use crate::cli::Cli;
use crate::config::GameConfig;
use crate::insights::{GameReport, Insights};
use crate::orchestrator::Orchestrator;
use crate::players::{ComputerPlayer, HumanPlayer, Player, SharedInput};
use crate::symbols::{SymbolError, Symbols};
use anyhow::Result;
use minimax_tictactoe::{Algorithm, Difficulty, MoveRng};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Who plays whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matchup {
    /// Two computer players.
    ComputerVsComputer,
    /// A human against the computer.
    HumanVsComputer {
        /// The computer moves first.
        human_second: bool,
    },
    /// Two humans sharing one input.
    HumanVsHuman,
}

/// Effective settings after merging the config file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Symbols drawn for the players.
    pub symbols: Symbols,
    /// Difficulty of computer players.
    pub difficulty: Difficulty,
    /// Search used by computer players.
    pub algorithm: Algorithm,
    /// Print the board after every move.
    pub print_moves: bool,
    /// Base seed for computer players.
    pub seed: Option<u64>,
}

impl Settings {
    /// Merges `config` with command-line overrides.
    ///
    /// Rejected symbols are returned alongside the settings; each rejected
    /// value leaves the previous symbol in place.
    #[instrument(skip_all)]
    pub fn resolve(cli: &Cli, config: &GameConfig) -> (Self, Vec<SymbolError>) {
        let (mut symbols, mut rejected) = config.build_symbols();
        for (number, symbol) in [(1, &cli.symbol_one), (2, &cli.symbol_two)] {
            if let Some(symbol) = symbol
                && let Err(err) = symbols.set(number, symbol)
            {
                rejected.push(err);
            }
        }

        let settings = Self {
            symbols,
            difficulty: cli
                .difficulty
                .as_deref()
                .map(Difficulty::from_label)
                .unwrap_or(*config.difficulty()),
            algorithm: cli.algorithm.unwrap_or(*config.algorithm()),
            print_moves: *config.print_moves() && !cli.quiet,
            seed: cli.seed.or(*config.seed()),
        };
        info!(
            difficulty = %settings.difficulty,
            algorithm = %settings.algorithm,
            seed = ?settings.seed,
            "Settings resolved"
        );
        (settings, rejected)
    }

    /// Random source for the `index`-th computer player.
    ///
    /// With a base seed, computer players get consecutive seeds so a
    /// computer-only game is fully reproducible.
    pub fn rng_for(&self, index: u64) -> MoveRng {
        match self.seed {
            Some(seed) => MoveRng::new(seed.wrapping_add(index)),
            None => MoveRng::from_random(),
        }
    }

    fn computer(&self, name: &str, index: u64) -> ComputerPlayer {
        ComputerPlayer::new(name, self.difficulty, self.rng_for(index))
            .with_algorithm(self.algorithm)
    }
}

/// Plays one game and returns its report.
///
/// Human players read from `input` and prompt on writers made by `prompt`;
/// the move log goes to `output`.
///
/// # Errors
///
/// Fails if a player cannot move (closed input, unavailable search) or
/// output cannot be written.
#[instrument(skip(settings, input, prompt, output))]
pub fn play<R, P, W>(
    matchup: Matchup,
    settings: &Settings,
    input: SharedInput<R>,
    prompt: impl Fn() -> P,
    output: W,
) -> Result<GameReport>
where
    R: BufRead + 'static,
    P: Write + 'static,
    W: Write,
{
    let human =
        |name: &str| HumanPlayer::new(name, settings.symbols, input.clone(), prompt());

    let mut seeds = Vec::new();
    let mut computer = |name: &str, index: u64| {
        let player = settings.computer(name, index);
        seeds.push(player.seed());
        info!(cpu = name, seed = player.seed(), "Computer player ready");
        player
    };

    let (one, two): (Box<dyn Player>, Box<dyn Player>) = match matchup {
        Matchup::ComputerVsComputer => (
            Box::new(computer("CPU 1", 0)),
            Box::new(computer("CPU 2", 1)),
        ),
        Matchup::HumanVsComputer { human_second: false } => {
            (Box::new(human("Player")), Box::new(computer("CPU", 0)))
        }
        Matchup::HumanVsComputer { human_second: true } => {
            (Box::new(computer("CPU", 0)), Box::new(human("Player")))
        }
        Matchup::HumanVsHuman => (Box::new(human("Player 1")), Box::new(human("Player 2"))),
    };

    let mut orchestrator =
        Orchestrator::new(one, two, settings.symbols, output).with_print_moves(settings.print_moves);
    let state = *orchestrator.run()?;

    let insights = Insights::from_state(&state).inspect_err(|err| warn!(error = %err, "No insights"))?;
    Ok(GameReport {
        insights,
        history: orchestrator.history().to_vec(),
        seeds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use minimax_tictactoe::Player as Mark;
    use std::cell::RefCell;
    use std::io::{Cursor, Empty, sink};
    use std::rc::Rc;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("minimax_games").chain(args.iter().copied())).unwrap()
    }

    fn no_input() -> SharedInput<Empty> {
        Rc::new(RefCell::new(std::io::empty()))
    }

    #[test]
    fn test_cli_overrides_config() {
        let (settings, rejected) = Settings::resolve(
            &cli(&["simulate", "-d", "EASY", "--seed", "3", "--symbol-one", "@", "-q"]),
            &GameConfig::default(),
        );
        assert!(rejected.is_empty());
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.seed, Some(3));
        assert_eq!(settings.symbols.get(Mark::One).as_char(), '@');
        assert!(!settings.print_moves);
    }

    #[test]
    fn test_rejected_symbol_keeps_previous() {
        let (settings, rejected) = Settings::resolve(
            &cli(&["simulate", "--symbol-two", "OO"]),
            &GameConfig::default(),
        );
        assert_eq!(rejected.len(), 1);
        assert_eq!(settings.symbols, Symbols::default());
    }

    #[test]
    fn test_config_symbols_applied_one_by_one() {
        let config: GameConfig =
            toml::from_str("player_one_symbol = \"E\"\nplayer_two_symbol = \"OO\"\n").unwrap();
        let (settings, rejected) = Settings::resolve(&cli(&["simulate"]), &config);
        assert_eq!(rejected.len(), 1);
        assert_eq!(settings.symbols.get(Mark::One).as_char(), 'E');
        assert_eq!(settings.symbols.get(Mark::Two).as_char(), 'O');
    }

    #[test]
    fn test_unknown_difficulty_plays_hard() {
        let (settings, _) =
            Settings::resolve(&cli(&["simulate", "-d", "nightmare"]), &GameConfig::default());
        assert_eq!(settings.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_consecutive_seeds() {
        let (settings, _) =
            Settings::resolve(&cli(&["simulate", "--seed", "41"]), &GameConfig::default());
        assert_eq!(settings.rng_for(0).seed(), 41);
        assert_eq!(settings.rng_for(1).seed(), 42);
    }

    #[test]
    fn test_hard_simulation_draws() {
        let (settings, _) = Settings::resolve(
            &cli(&["simulate", "-d", "hard", "--seed", "1"]),
            &GameConfig::default(),
        );
        let mut output = Vec::new();
        let report = play(
            Matchup::ComputerVsComputer,
            &settings,
            no_input(),
            sink,
            &mut output,
        )
        .unwrap();

        assert_eq!(report.insights.result_label(), "DRAW");
        assert_eq!(report.history.len(), 9);
        assert_eq!(report.seeds, vec![1, 2]);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("----- Move: #9 -----"));
    }

    #[test]
    fn test_unavailable_algorithm_fails() {
        let (settings, _) = Settings::resolve(
            &cli(&["simulate", "--algorithm", "alpha-beta-pruning"]),
            &GameConfig::default(),
        );
        let result = play(Matchup::ComputerVsComputer, &settings, no_input(), sink, sink());
        assert!(result.is_err());
    }

    #[test]
    fn test_human_cannot_beat_hard_computer() {
        let (settings, _) =
            Settings::resolve(&cli(&["play", "-d", "hard", "--seed", "5"]), &GameConfig::default());
        // Every cell in row-major order; occupied ones are rejected and skipped.
        let lines = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
        let input = Rc::new(RefCell::new(Cursor::new(lines)));

        let report = play(
            Matchup::HumanVsComputer { human_second: false },
            &settings,
            input,
            sink,
            sink(),
        )
        .unwrap();

        assert_ne!(*report.insights.winner(), Some(Mark::One));
        assert_eq!(report.history[0].name, "Player");
        assert_eq!(report.history[1].name, "CPU");
        assert_eq!(report.seeds, vec![5]);
    }
}
