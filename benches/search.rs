use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockpilot::core::rules::{clear_lines, enumerate_moves, place_block};
use blockpilot::core::{masks, Board, GameState};
use blockpilot::engine::{evaluate, search, EvalWeights, SearchConfig};
use blockpilot::types::PieceKind;

/// A representative mid-game board: ragged stack with one covered hole.
fn midgame_board() -> Board {
    let mut board = Board::new();
    let heights = [3usize, 4, 2, 5, 4, 4, 3, 2, 1, 0];
    for (col, &height) in heights.iter().enumerate() {
        for row in (20 - height)..20 {
            board.set(row as i8, col as i8, Some(PieceKind::L));
        }
    }
    board.set(18, 3, None);
    board
}

fn bench_enumerate_moves(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("enumerate_moves_t", |b| {
        b.iter(|| enumerate_moves(black_box(&board), black_box(PieceKind::T)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let board = midgame_board();
    let mask = &masks(PieceKind::T)[0];
    c.bench_function("place_and_clear", |b| {
        b.iter(|| {
            let stamped = place_block(black_box(&board), mask, 14, 8).unwrap();
            clear_lines(&stamped)
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    let weights = EvalWeights::default();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| evaluate(black_box(&board), black_box(2.2), &weights))
    });
}

fn bench_one_ply_search(c: &mut Criterion) {
    let mut state = GameState::new();
    state.update_board(&midgame_board().to_rows()).unwrap();
    state.update_current_piece(PieceKind::J);
    let config = SearchConfig::default();

    c.bench_function("search_one_ply", |b| {
        b.iter(|| search(black_box(&state), &config).unwrap())
    });
}

fn bench_two_ply_search(c: &mut Criterion) {
    let mut state = GameState::new();
    state.update_board(&midgame_board().to_rows()).unwrap();
    state.update_current_piece(PieceKind::J);
    state.update_next_piece(PieceKind::I);
    let config = SearchConfig::default();

    // The full decision: must stay far under the ~100ms polling cadence.
    c.bench_function("search_two_ply", |b| {
        b.iter(|| search(black_box(&state), &config).unwrap())
    });
}

criterion_group!(
    benches,
    bench_enumerate_moves,
    bench_simulate,
    bench_evaluate,
    bench_one_ply_search,
    bench_two_ply_search
);
criterion_main!(benches);
