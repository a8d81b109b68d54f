//! Board module - the observed game grid.
//!
//! The board is a 20x10 grid where each cell is empty or filled with a piece
//! kind. Uses a flat array for cache locality and cheap cloning; the rules
//! engine copies boards freely during simulation.
//! Coordinates: (row, col) with row 0 at the top, col 0 at the left.

use blockpilot_types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// The game board - 20 rows x 10 columns using flat row-major storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col), or `None` if out of bounds.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * BOARD_COLS + (col as usize))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        BOARD_COLS
    }

    /// Get cell at (row, col). Returns `None` if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and occupied.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if position is out of bounds.
    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Count occupied cells on the whole board.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Copy one row of cells into `row` of this board.
    ///
    /// Used by [`crate::state::GameState::update_board`] when ingesting a
    /// recognized grid. Panics if `cells` is not exactly one row wide; the
    /// caller validates dimensions first.
    pub(crate) fn write_row(&mut self, row: usize, cells: &[Cell]) {
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS].copy_from_slice(cells);
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array (row-major).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create a board from nested rows. Panics on dimension mismatch, so only
    /// suitable for fixtures with known-good shapes.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), BOARD_ROWS);
        assert!(rows.iter().all(|row| row.len() == BOARD_COLS));

        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            board.write_row(r, row);
        }
        board
    }

    /// Convert to nested rows for assertions and display.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_ROWS)
            .map(|r| {
                let start = r * BOARD_COLS;
                self.cells[start..start + BOARD_COLS].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        for r in 0..BOARD_ROWS {
            let start = r * BOARD_COLS;
            let line: String = self.cells[start..start + BOARD_COLS]
                .iter()
                .map(|cell| if cell.is_some() { '#' } else { '.' })
                .collect();
            writeln!(f, "    {line}")?;
        }
        write!(f, "}}")
    }
}
