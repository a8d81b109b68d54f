//! Board rules engine - pure functions over boards and rotation masks.
//!
//! Collision testing, gravity simulation, legal-move enumeration, block
//! stamping, line clearing, and the attack-score table. Nothing here mutates
//! its inputs; simulation works on copies so the search engine can explore
//! candidate placements freely.

use blockpilot_types::{Cell, Placement, PieceKind, BOARD_COLS, BOARD_ROWS, SPAWN_ROW};

use crate::board::Board;
use crate::catalog::{masks, RotationMask};

/// Contract violation inside the rules engine.
///
/// `enumerate_moves` only produces in-bounds placements, so hitting this
/// from a search-produced placement means a bug in enumeration, not a game
/// condition. It is surfaced rather than swallowed for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// `place_block` was asked to stamp an occupied mask cell outside the
    /// board. Carries the offending board coordinates.
    OutOfBounds { row: i8, col: i8 },
}

impl std::error::Error for RulesError {}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesError::OutOfBounds { row, col } => {
                write!(f, "block cell out of bounds at board ({row}, {col})")
            }
        }
    }
}

/// True if any occupied cell of `mask`, anchored at (row, col), is out of
/// board bounds or overlaps an occupied board cell.
pub fn is_collision(board: &Board, mask: &RotationMask, row: i8, col: i8) -> bool {
    for (mr, mc) in mask.cells() {
        let (br, bc) = (row + mr, col + mc);
        if board.is_out_of_bounds(br, bc) || board.is_occupied(br, bc) {
            return true;
        }
    }
    false
}

/// Simulate gravity: starting from `start_row`, advance the anchor row until
/// the next step would collide, and return the last non-colliding row.
///
/// The caller must ensure `start_row` itself is collision-free; if it is
/// not, the return value is `start_row - 1` and will fail the caller's
/// collision recheck. Pieces enter play at [`SPAWN_ROW`], so stacks tall
/// enough to reach the hidden top rows are out of simulation range.
pub fn drop_row(board: &Board, mask: &RotationMask, col: i8, start_row: i8) -> i8 {
    let mut row = start_row;
    while !is_collision(board, mask, row, col) {
        row += 1;
    }
    row - 1
}

/// Enumerate every legal resting placement of `kind` on `board`.
///
/// Orientation-major, column ascending: for each rotation mask, the occupied
/// column span is slid across the full board width (the anchor column goes
/// negative when the span does not start at mask column 0), the resting row
/// is computed by [`drop_row`], and the placement is kept only if it is
/// collision-free. Returns an empty vector on an effectively full board.
pub fn enumerate_moves(board: &Board, kind: PieceKind) -> Vec<Placement> {
    let mut moves = Vec::new();

    for (spin, mask) in masks(kind).iter().enumerate() {
        let slots = BOARD_COLS as i8 - mask.width();
        for slot in 0..=slots {
            // Align the occupied span's left edge with board column `slot`.
            let col = slot - mask.min_col();
            let row = drop_row(board, mask, col, SPAWN_ROW);
            if !is_collision(board, mask, row, col) {
                moves.push(Placement::new(spin, row, col));
            }
        }
    }

    moves
}

/// Stamp `mask` onto a copy of `board` at (row, col) and return the copy.
///
/// The input board is never mutated. Occupied mask cells overwrite whatever
/// was at the target; an occupied cell mapping outside the board is a
/// [`RulesError::OutOfBounds`] contract violation.
pub fn place_block(
    board: &Board,
    mask: &RotationMask,
    row: i8,
    col: i8,
) -> Result<Board, RulesError> {
    let mut stamped = board.clone();
    for (mr, mc) in mask.cells() {
        let (br, bc) = (row + mr, col + mc);
        if !stamped.set(br, bc, Some(mask.kind())) {
            return Err(RulesError::OutOfBounds { row: br, col: bc });
        }
    }
    Ok(stamped)
}

/// Remove every full row, inserting empty rows at the top to keep the board
/// height fixed. Returns the new board and the number of rows cleared.
///
/// A row is full iff every cell is occupied, regardless of which piece kind
/// fills each cell.
pub fn clear_lines(board: &Board) -> (Board, usize) {
    let mut out = Board::new();
    let mut write = BOARD_ROWS as i8;
    let mut cleared = 0;

    for read in (0..BOARD_ROWS).rev() {
        if board.is_row_full(read) {
            cleared += 1;
            continue;
        }
        write -= 1;
        for col in 0..BOARD_COLS as i8 {
            let cell: Cell = board.get(read as i8, col).flatten();
            out.set(write, col, cell);
        }
    }

    (out, cleared)
}

/// Attack score awarded for clearing `cleared` rows in one move.
///
/// Multi-line clears are rewarded disproportionately; clearing nothing still
/// scores a small baseline. More than four rows can clear at once when
/// garbage rows complete, and score the same as four.
pub fn attack_score(cleared: usize) -> f32 {
    match cleared {
        0 => 0.2,
        1 => 2.2,
        2 => 4.8,
        3 => 7.6,
        _ => 11.2,
    }
}
