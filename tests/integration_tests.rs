//! End-to-end integration - a full self-play loop through the public API,
//! exercising state updates, search, simulation, and clearing together the
//! way the driver binary does.

use blockpilot::core::rules::{clear_lines, place_block};
use blockpilot::core::{masks, Board, GameState, PieceBag};
use blockpilot::engine::{search, SearchConfig, SearchError};
use blockpilot::types::SPAWN_COL;

#[test]
fn test_seeded_self_play_runs_and_clears_lines() {
    let mut bag = PieceBag::new(2024);
    let mut board = Board::new();
    let mut state = GameState::new();
    let config = SearchConfig::default();

    let mut current = bag.next();
    let mut next = bag.next();
    state.update_current_piece(current);
    state.update_next_piece(next);
    state.set_fresh(true);

    let mut pieces_placed = 0usize;
    let mut lines_cleared = 0usize;

    for _ in 0..200 {
        let placement = match search(&state, &config) {
            Ok(p) => p,
            Err(SearchError::NoLegalPlacement) => break,
            Err(err) => panic!("search failed mid-run: {err}"),
        };

        let mask = &masks(current)[placement.spin];
        let stamped = place_block(&board, mask, placement.row, placement.col)
            .expect("search returned an unstampable placement");
        let (after, cleared) = clear_lines(&stamped);

        board = after;
        pieces_placed += 1;
        lines_cleared += cleared;

        current = next;
        next = bag.next();
        state.update_board(&board.to_rows()).unwrap();
        state.update_current_piece(current);
        state.update_next_piece(next);
        state.set_fresh(true);
    }

    assert!(pieces_placed > 0);
    // A two-ply heuristic should comfortably survive 200 pieces on an
    // empty start and clear lines along the way.
    assert_eq!(pieces_placed, 200, "engine topped out early");
    assert!(lines_cleared > 0, "no lines cleared in 200 pieces");

    // Cell accounting: 4 cells per piece, 10 per cleared line.
    assert_eq!(
        board.occupied_cells(),
        pieces_placed * 4 - lines_cleared * 10
    );
}

#[test]
fn test_self_play_is_deterministic_per_seed() {
    fn run(seed: u32) -> (usize, Vec<(usize, i8, i8)>) {
        let mut bag = PieceBag::new(seed);
        let mut board = Board::new();
        let mut state = GameState::new();
        let config = SearchConfig::default();

        let mut current = bag.next();
        let mut next = bag.next();
        state.update_current_piece(current);
        state.update_next_piece(next);

        let mut trace = Vec::new();
        let mut lines = 0usize;
        for _ in 0..60 {
            let p = match search(&state, &config) {
                Ok(p) => p,
                Err(_) => break,
            };
            trace.push((p.spin, p.row, p.col));

            let mask = &masks(current)[p.spin];
            let stamped = place_block(&board, mask, p.row, p.col).unwrap();
            let (after, cleared) = clear_lines(&stamped);
            board = after;
            lines += cleared;

            current = next;
            next = bag.next();
            state.update_board(&board.to_rows()).unwrap();
            state.update_current_piece(current);
            state.update_next_piece(next);
        }
        (lines, trace)
    }

    assert_eq!(run(7), run(7));
    assert_ne!(run(7).1, run(8).1);
}

#[test]
fn test_placement_translates_to_input_commands() {
    // The injector turns a placement into `spin` clockwise rotations and
    // `col - SPAWN_COL` horizontal moves. Sanity-check the arithmetic on a
    // known board: a vertical I dropped into a left-edge well.
    let mut board = Board::new();
    for col in 1..10 {
        for row in 16..20 {
            board.set(row, col, Some(blockpilot::types::PieceKind::O));
        }
    }

    let mut state = GameState::new();
    state.update_board(&board.to_rows()).unwrap();
    state.update_current_piece(blockpilot::types::PieceKind::I);

    let placement = search(&state, &SearchConfig::default()).unwrap();

    // Only the vertical orientation fits the one-wide well at column 0.
    assert_eq!(placement.spin, 1);
    assert_eq!(placement.col, -2);

    let rotations = placement.spin;
    let shift = placement.col - SPAWN_COL;
    assert_eq!(rotations, 1);
    assert_eq!(shift, -5); // five taps left from the spawn column
}
