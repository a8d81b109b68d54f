//! Shared types and constants for the blockpilot decision core.
//!
//! Pure data with no dependencies, usable from the rules engine, the search
//! engine, and any external collaborator (recognizer, input injector).
//!
//! # Board conventions
//!
//! The board is 20 rows by 10 columns, addressed as (row, col) with row 0 at
//! the top and gravity pointing toward higher row indices. Pieces are 4x4
//! occupancy masks anchored by their top-left corner; a freshly recognized
//! piece sits with its mask anchored at row [`SPAWN_ROW`], column
//! [`SPAWN_COL`].

/// Board dimensions (rows x columns).
pub const BOARD_ROWS: usize = 20;
pub const BOARD_COLS: usize = 10;

/// Row where a piece's mask is anchored when it enters play. The top two
/// rows are hidden in the observed game, so gravity simulation starts here.
pub const SPAWN_ROW: i8 = 2;

/// Column where a piece's mask is anchored at spawn. Callers translating a
/// placement into key presses move the piece `col - SPAWN_COL` columns
/// (negative = left) before dropping.
pub const SPAWN_COL: i8 = 3;

/// Side length of a piece occupancy mask.
pub const MASK_SIZE: usize = 4;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All piece kinds, in catalog order.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// Parse piece kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = filled with a piece kind).
///
/// Distinct filled values carry no rules meaning: a row is full iff every
/// cell is `Some`, regardless of which pieces filled it.
pub type Cell = Option<PieceKind>;

/// A fully specified candidate position for a piece on a board.
///
/// `spin` indexes the kind's ordered rotation-mask list and doubles as the
/// number of clockwise rotation commands needed to reach the orientation.
/// `(row, col)` is where the mask's top-left corner lands; `col` may be
/// negative when the mask's occupied span does not start at mask column 0
/// (the occupied cells themselves are always in bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub spin: usize,
    pub row: i8,
    pub col: i8,
}

impl Placement {
    pub fn new(spin: usize, row: i8, col: i8) -> Self {
        Self { spin, row, col }
    }
}
