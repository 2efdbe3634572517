//! Command-line interface for minimax_games.

use clap::{Parser, Subcommand};
use minimax_tictactoe::Algorithm;
use std::path::PathBuf;

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "minimax_games")]
#[command(about = "Tic-tac-toe with a minimax computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "minimax_games.toml")]
    pub config: PathBuf,

    /// Computer difficulty: easy, medium or hard (unknown values play hard)
    #[arg(short, long, global = true)]
    pub difficulty: Option<String>,

    /// Search algorithm for computer players
    #[arg(long, global = true)]
    pub algorithm: Option<Algorithm>,

    /// Seed for the computer players' random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Symbol for player 1
    #[arg(long, global = true)]
    pub symbol_one: Option<String>,

    /// Symbol for player 2
    #[arg(long, global = true)]
    pub symbol_two: Option<String>,

    /// Do not print the board after every move
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the game report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Mode to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available modes
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Computer against computer
    Simulate,

    /// Human against computer
    Play {
        /// Let the computer open the game
        #[arg(long)]
        human_second: bool,
    },

    /// Two humans at the same terminal
    Versus,

    /// Print the coordinates of every cell
    Mapping,
}
