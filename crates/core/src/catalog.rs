//! Piece catalog - rotation masks for the 7 tetromino kinds.
//!
//! Each kind has an ordered list of 4x4 occupancy masks, clockwise from the
//! spawn orientation, so a mask's index is also the number of clockwise
//! rotation commands needed to reach it. Rotation counts: I, S, Z have 2,
//! O has 1, T, J, L have 4.
//!
//! The catalog is built once on first use; per-mask metadata (occupied
//! column span, per-column drop depth) is derived at build time and cached.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use blockpilot_types::{PieceKind, ALL_KINDS, MASK_SIZE};

/// Raw 4x4 occupancy grid, row-major, 1 = filled.
type Grid = [[u8; MASK_SIZE]; MASK_SIZE];

/// One rotation state of a piece: its occupancy grid plus derived data.
#[derive(Debug, Clone)]
pub struct RotationMask {
    kind: PieceKind,
    grid: Grid,
    min_col: i8,
    max_col: i8,
    col_depths: [Option<i8>; MASK_SIZE],
}

impl RotationMask {
    fn build(kind: PieceKind, grid: Grid) -> Self {
        let mut min_col = MASK_SIZE as i8;
        let mut max_col = -1i8;
        let mut col_depths = [None; MASK_SIZE];

        for r in 0..MASK_SIZE {
            for c in 0..MASK_SIZE {
                if grid[r][c] == 0 {
                    continue;
                }
                min_col = min_col.min(c as i8);
                max_col = max_col.max(c as i8);
                col_depths[c] = Some(r as i8);
            }
        }
        debug_assert!(max_col >= 0, "empty rotation mask for {kind:?}");

        Self {
            kind,
            grid,
            min_col,
            max_col,
            col_depths,
        }
    }

    /// The piece kind this mask belongs to.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Whether the mask cell at (row, col) is occupied. Out-of-mask
    /// coordinates read as empty.
    #[inline]
    pub fn filled(&self, row: i8, col: i8) -> bool {
        if row < 0 || row >= MASK_SIZE as i8 || col < 0 || col >= MASK_SIZE as i8 {
            return false;
        }
        self.grid[row as usize][col as usize] != 0
    }

    /// Leftmost occupied mask column.
    pub fn min_col(&self) -> i8 {
        self.min_col
    }

    /// Rightmost occupied mask column.
    pub fn max_col(&self) -> i8 {
        self.max_col
    }

    /// Width of the occupied column span.
    pub fn width(&self) -> i8 {
        self.max_col - self.min_col + 1
    }

    /// Row index of the lowest occupied cell in the given mask column, or
    /// `None` if that column is empty.
    pub fn col_depth(&self, col: usize) -> Option<i8> {
        self.col_depths[col]
    }

    /// Iterate over the (row, col) mask coordinates of occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..MASK_SIZE as i8).flat_map(move |r| {
            (0..MASK_SIZE as i8).filter_map(move |c| self.filled(r, c).then_some((r, c)))
        })
    }
}

/// Ordered rotation masks for a piece kind.
pub fn masks(kind: PieceKind) -> &'static [RotationMask] {
    static CATALOG: OnceLock<[ArrayVec<RotationMask, 4>; 7]> = OnceLock::new();
    let catalog = CATALOG.get_or_init(build_catalog);
    &catalog[kind_index(kind)]
}

fn kind_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    }
}

fn build_catalog() -> [ArrayVec<RotationMask, 4>; 7] {
    let mut catalog: [ArrayVec<RotationMask, 4>; 7] = Default::default();
    for kind in ALL_KINDS {
        let entry = &mut catalog[kind_index(kind)];
        for grid in grids(kind) {
            entry.push(RotationMask::build(kind, *grid));
        }
    }
    catalog
}

/// Raw occupancy grids per kind, clockwise from spawn orientation.
fn grids(kind: PieceKind) -> &'static [Grid] {
    match kind {
        PieceKind::I => &[
            [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]],
        ],
        PieceKind::O => &[[[0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]],
        PieceKind::T => &[
            [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
            [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
            [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        ],
        PieceKind::S => &[
            [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
        ],
        PieceKind::Z => &[
            [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        ],
        PieceKind::J => &[
            [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
            [[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
            [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
        ],
        PieceKind::L => &[
            [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
            [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
            [[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        ],
    }
}
