//! End-to-end games driven through config, settings and the orchestrator.

use clap::Parser;
use minimax_games::{Cli, GameConfig, InsightOptions, Matchup, Settings, SharedInput, play};
use minimax_tictactoe::{Action, GameState, Player as Mark};
use std::cell::RefCell;
use std::io::{Cursor, Empty, Write, sink};
use std::rc::Rc;
use tempfile::NamedTempFile;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("minimax_games").chain(args.iter().copied()))
        .expect("valid arguments")
}

fn no_input() -> SharedInput<Empty> {
    Rc::new(RefCell::new(std::io::empty()))
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_config_file_drives_simulation() {
    let file = config_file(
        r#"
player_one_symbol = "A"
player_two_symbol = "B"
difficulty = "hard"
print_moves = true
seed = 11
"#,
    );
    let config = GameConfig::from_file(file.path()).expect("config parses");
    let (settings, rejected) = Settings::resolve(&cli(&["simulate"]), &config);
    assert!(rejected.is_empty());

    let mut output = Vec::new();
    let report = play(
        Matchup::ComputerVsComputer,
        &settings,
        no_input(),
        sink,
        &mut output,
    )
    .expect("game finishes");

    let printed = String::from_utf8(output).expect("utf-8 output");
    assert!(printed.starts_with("----- Move: #1 -----\nA - -\n- - -\n- - -\n"));
    assert!(printed.ends_with("----- Move: #9 -----\nA A B\nB B A\nA B A\n"));
    assert_eq!(report.seeds, vec![11, 12]);

    let text = report.insights.render(&settings.symbols, InsightOptions::default());
    assert!(text.starts_with("Match result: DRAW\nDone moves: 9\nGame duration: "));
}

#[test]
fn test_same_seed_replays_easy_game() {
    let (settings, _) = Settings::resolve(
        &cli(&["simulate", "-d", "easy", "--seed", "2024", "-q"]),
        &GameConfig::default(),
    );
    let first = play(Matchup::ComputerVsComputer, &settings, no_input(), sink, sink())
        .expect("first game");
    let second = play(Matchup::ComputerVsComputer, &settings, no_input(), sink, sink())
        .expect("second game");

    let moves = |report: &minimax_games::GameReport| {
        report.history.iter().map(|record| record.action).collect::<Vec<_>>()
    };
    assert_eq!(moves(&first), moves(&second));
    assert_eq!(first.insights.outcome(), second.insights.outcome());
}

#[test]
fn test_computer_opens_when_human_second() {
    let (settings, _) = Settings::resolve(
        &cli(&["play", "--human-second", "-d", "hard", "--seed", "0", "-q"]),
        &GameConfig::default(),
    );
    let lines = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
    let input = Rc::new(RefCell::new(Cursor::new(lines)));

    let report = play(
        Matchup::HumanVsComputer { human_second: true },
        &settings,
        input,
        sink,
        sink(),
    )
    .expect("game finishes");

    // Hard opens in the first cell in row-major order.
    assert_eq!(report.history[0].name, "CPU");
    assert_eq!(report.history[0].action.to_string(), "(0, 0)");
    assert_eq!(report.history[1].player, Mark::Two);
    assert_ne!(*report.insights.winner(), Some(Mark::Two));
}

#[test]
fn test_versus_with_shared_input() {
    let (settings, _) = Settings::resolve(&cli(&["versus", "-q"]), &GameConfig::default());
    // Player 1 wins down the first column; "x" is rejected and re-prompted.
    let lines = "0 0\n0 1\nx\n1 0\n1 1\n2 0\n";
    let input = Rc::new(RefCell::new(Cursor::new(lines)));

    let report = play(Matchup::HumanVsHuman, &settings, input, sink, sink())
        .expect("game finishes");

    assert_eq!(report.insights.result_label(), "VERTICAL WIN");
    assert_eq!(*report.insights.winner(), Some(Mark::One));
    assert_eq!(report.history.len(), 5);
    assert!(report.seeds.is_empty());
}

#[test]
fn test_report_serializes_to_json() {
    let (settings, _) = Settings::resolve(
        &cli(&["simulate", "-d", "hard", "--seed", "3", "-q"]),
        &GameConfig::default(),
    );
    let report = play(Matchup::ComputerVsComputer, &settings, no_input(), sink, sink())
        .expect("game finishes");

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["insights"]["moves"], 9);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(9));
    assert_eq!(json["history"][0]["action"]["row"], 0);
    assert_eq!(json["seeds"], serde_json::json!([3, 4]));
}

#[test]
fn test_game_state_serializes_for_reports() {
    let state =
        GameState::from_actions(&[Action::new(1, 1), Action::new(0, 0)]).expect("legal moves");

    let json = serde_json::to_value(state).expect("state serializes");
    assert_eq!(json["move_count"], 2);
    assert_eq!(json["board"]["cells"][1][1], serde_json::json!({ "Occupied": "One" }));
    assert_eq!(json["board"]["cells"][0][0], serde_json::json!({ "Occupied": "Two" }));
    assert_eq!(json["board"]["cells"][2][2], "Empty");
}
