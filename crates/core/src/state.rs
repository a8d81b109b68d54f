//! Game state holder - the handoff point between recognition and search.
//!
//! One `GameState` value is owned by the control loop: the recognition
//! collaborator writes it after each captured frame, the search engine reads
//! it. The single-writer/single-reader handoff is enforced by the calling
//! convention (write, then search, once per polling cycle), not by locking.

use blockpilot_types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

use crate::board::Board;

/// Invalid input from the recognition collaborator.
///
/// The control loop is expected to skip the current cycle and retry on the
/// next frame rather than abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// A recognized grid did not match the fixed board dimensions.
    DimensionMismatch { rows: usize, cols: usize },
}

impl std::error::Error for StateError {}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::DimensionMismatch { rows, cols } => write!(
                f,
                "board data shape mismatch: got {rows}x{cols}, expected {BOARD_ROWS}x{BOARD_COLS}"
            ),
        }
    }
}

/// Observed game state: board, active piece, next-piece preview, freshness.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<PieceKind>,
    next: Option<PieceKind>,
    /// Set by the recognizer once both piece zones have been read for the
    /// current frame; cleared by the consumer after acting on it.
    fresh: bool,
}

impl GameState {
    /// Create an empty state: blank board, no pieces recognized yet.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            fresh: false,
        }
    }

    /// Replace the board with a deep copy of the recognized grid.
    ///
    /// Fails if the grid's dimensions do not match the fixed board size; the
    /// board is left untouched in that case.
    pub fn update_board(&mut self, grid: &[Vec<Cell>]) -> Result<(), StateError> {
        if grid.len() != BOARD_ROWS || grid.iter().any(|row| row.len() != BOARD_COLS) {
            return Err(StateError::DimensionMismatch {
                rows: grid.len(),
                cols: grid.first().map_or(0, Vec::len),
            });
        }
        for (r, row) in grid.iter().enumerate() {
            self.board.write_row(r, row);
        }
        Ok(())
    }

    /// Set the active piece recognized in the play zone.
    pub fn update_current_piece(&mut self, kind: PieceKind) {
        self.current = Some(kind);
    }

    /// Set the upcoming piece recognized in the preview zone.
    pub fn update_next_piece(&mut self, kind: PieceKind) {
        self.next = Some(kind);
    }

    /// Mark the state as freshly written for this frame.
    pub fn set_fresh(&mut self, fresh: bool) {
        self.fresh = fresh;
    }

    /// Whether the recognizer has finished writing the current frame.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<PieceKind> {
        self.current
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    /// Clear board and piece slots back to the initial state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = None;
        self.next = None;
        self.fresh = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_board_copies_grid() {
        let mut state = GameState::new();
        let mut grid = vec![vec![None; BOARD_COLS]; BOARD_ROWS];
        grid[19][0] = Some(PieceKind::I);

        state.update_board(&grid).unwrap();
        assert!(state.board().is_occupied(19, 0));

        // Mutating the source grid afterwards must not affect the state.
        grid[19][1] = Some(PieceKind::I);
        assert!(!state.board().is_occupied(19, 1));
    }

    #[test]
    fn update_board_rejects_wrong_dimensions() {
        let mut state = GameState::new();

        let short = vec![vec![None; BOARD_COLS]; BOARD_ROWS - 1];
        let err = state.update_board(&short).unwrap_err();
        assert_eq!(
            err,
            StateError::DimensionMismatch {
                rows: BOARD_ROWS - 1,
                cols: BOARD_COLS
            }
        );

        let narrow = vec![vec![None; BOARD_COLS - 2]; BOARD_ROWS];
        assert!(state.update_board(&narrow).is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = GameState::new();
        state.update_current_piece(PieceKind::T);
        state.update_next_piece(PieceKind::S);
        state.set_fresh(true);
        let mut grid = vec![vec![None; BOARD_COLS]; BOARD_ROWS];
        grid[10][5] = Some(PieceKind::O);
        state.update_board(&grid).unwrap();

        state.reset();
        assert_eq!(state.current_piece(), None);
        assert_eq!(state.next_piece(), None);
        assert!(!state.is_fresh());
        assert_eq!(state.board().occupied_cells(), 0);
    }
}
