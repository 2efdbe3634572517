//! minimax_games - tic-tac-toe against a minimax opponent.

use anyhow::Result;
use clap::Parser;
use minimax_games::{
    Cli, Command, GameConfig, InsightOptions, Matchup, Settings, play, render_mapping,
};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,minimax_games=info")),
        )
        .with_writer(io::stderr)
        .init();

    let matchup = match cli.command {
        Command::Mapping => {
            print!("{}", render_mapping());
            return Ok(());
        }
        Command::Simulate => Matchup::ComputerVsComputer,
        Command::Play { human_second } => Matchup::HumanVsComputer { human_second },
        Command::Versus => Matchup::HumanVsHuman,
    };

    let config = GameConfig::load_or_default(&cli.config)?;
    debug!(?config, "Configuration loaded");

    let (settings, rejected) = Settings::resolve(&cli, &config);
    for err in &rejected {
        warn!(error = %err, "Keeping previous symbol");
        eprintln!("Invalid symbol: {}", err);
    }

    if matches!(matchup, Matchup::HumanVsComputer { .. } | Matchup::HumanVsHuman) {
        print!("{}", render_mapping());
    }

    info!(?matchup, "Starting game");
    let input = Rc::new(RefCell::new(io::stdin().lock()));
    let report = play(matchup, &settings, input, io::stdout, io::stdout())?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        write!(
            stdout,
            "{}",
            report
                .insights
                .render(&settings.symbols, InsightOptions::default())
        )?;
    }

    Ok(())
}
