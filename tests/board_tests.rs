//! Board integration tests - grid addressing and row bookkeeping.

use blockpilot::core::Board;
use blockpilot::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);
    assert_eq!(board.occupied_cells(), 0);

    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(row, col), Some(None));
            assert!(!board.is_occupied(row, col));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_ROWS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_COLS as i8), None);

    assert!(board.is_out_of_bounds(-1, 0));
    assert!(board.is_out_of_bounds(0, BOARD_COLS as i8));
    assert!(!board.is_out_of_bounds(19, 9));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(10, 5));

    assert!(board.set(10, 5, None));
    assert_eq!(board.get(10, 5), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::I)));
    assert!(!board.set(0, BOARD_COLS as i8, Some(PieceKind::I)));
}

#[test]
fn test_board_row_full() {
    let mut board = Board::new();
    let bottom = BOARD_ROWS - 1;

    for col in 0..BOARD_COLS as i8 {
        board.set(bottom as i8, col, Some(PieceKind::S));
    }
    assert!(board.is_row_full(bottom));
    assert!(!board.is_row_full(bottom - 1));

    board.set(bottom as i8, 0, None);
    assert!(!board.is_row_full(bottom));
}

#[test]
fn test_board_from_rows_roundtrip() {
    let mut rows = vec![vec![None; BOARD_COLS]; BOARD_ROWS];
    rows[0][0] = Some(PieceKind::I);
    rows[19][9] = Some(PieceKind::Z);

    let board = Board::from_rows(rows.clone());
    assert_eq!(board.to_rows(), rows);
    assert_eq!(board.occupied_cells(), 2);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.set(3, 3, Some(PieceKind::O));
    board.set(19, 0, Some(PieceKind::L));

    board.clear();
    assert_eq!(board.occupied_cells(), 0);
}
