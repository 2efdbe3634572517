use criterion::{Criterion, criterion_group, criterion_main};
use minimax_tictactoe::{Action, Difficulty, GameState, Minimax, MoveRng};
use std::hint::black_box;

fn bench_single_move_empty_board(difficulty: Difficulty) {
    let mut rng = MoveRng::new(7);
    black_box(Minimax::new(difficulty).choose_move(&GameState::new(), &mut rng));
}

fn bench_single_move_mid_game() {
    let state = GameState::from_actions(&[Action::new(1, 1), Action::new(0, 0), Action::new(2, 2)])
        .unwrap_or_default();
    let mut rng = MoveRng::new(7);
    black_box(Minimax::new(Difficulty::Hard).choose_move(&state, &mut rng));
}

fn bench_full_game() {
    let search = Minimax::new(Difficulty::Hard);
    let mut rng = MoveRng::new(7);
    let mut state = GameState::new();
    while let Some(action) = search.choose_move(&state, &mut rng) {
        if state.apply_in_place(action).is_err() {
            break;
        }
    }
    black_box(state);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("single_move_empty_hard", |b| {
        b.iter(|| bench_single_move_empty_board(Difficulty::Hard))
    });

    group.bench_function("single_move_empty_easy", |b| {
        b.iter(|| bench_single_move_empty_board(Difficulty::Easy))
    });

    group.bench_function("single_move_mid_game", |b| b.iter(bench_single_move_mid_game));

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
