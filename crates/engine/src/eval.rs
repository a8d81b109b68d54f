//! Position evaluator - heuristic desirability score for a resulting board.
//!
//! The score combines four weighted terrain terms (holes, bumpiness, a
//! target-height comfort band, height variance) with the attack bonus of the
//! move that produced the board. Heights are measured as the row index of
//! the first occupied cell from the top, so a *lower* value means a *taller*
//! stack. Stateless and deterministic: identical inputs always produce the
//! identical score.

use blockpilot_core::Board;
use blockpilot_types::{BOARD_COLS, BOARD_ROWS};

/// Tunable evaluation weights. Penalty weights are negative; the defaults
/// are the reference tuning for the 20x10 board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalWeights {
    /// Per covered hole (empty cell strictly below its column's first
    /// occupied cell).
    pub hole: f32,
    /// Per unit of absolute height difference between adjacent columns.
    pub bumpiness: f32,
    /// Scale of the quadratic penalty when the trimmed mean height leaves
    /// the comfort band; normalized by the board row count.
    pub target_height: f32,
    /// Scale of the height-variance penalty.
    pub variance: f32,
    /// Comfort band for the trimmed mean height, in top-row-index units
    /// (lower index = taller stack).
    pub band_low: f32,
    pub band_high: f32,
    /// Fixed divisor applied to the variance sum. Kept independent of board
    /// width; the reference weights were tuned with 100.
    pub variance_normalizer: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            hole: -80.0,
            bumpiness: -5.0,
            target_height: -10.0,
            variance: -10.0,
            band_low: 4.0,
            band_high: 10.0,
            variance_normalizer: 100.0,
        }
    }
}

/// Per-column row index of the first occupied cell from the top, or the
/// board height for an empty column.
fn column_tops(board: &Board) -> [i32; BOARD_COLS] {
    let mut tops = [BOARD_ROWS as i32; BOARD_COLS];
    for (col, top) in tops.iter_mut().enumerate() {
        for row in 0..BOARD_ROWS as i8 {
            if board.is_occupied(row, col as i8) {
                *top = row as i32;
                break;
            }
        }
    }
    tops
}

/// Count empty cells lying strictly below their column's first occupied cell.
fn count_holes(board: &Board, tops: &[i32; BOARD_COLS]) -> i32 {
    let mut holes = 0;
    for (col, &top) in tops.iter().enumerate() {
        for row in (top + 1)..BOARD_ROWS as i32 {
            if !board.is_occupied(row as i8, col as i8) {
                holes += 1;
            }
        }
    }
    holes
}

/// Mean of the column tops with the single highest and single lowest value
/// dropped (when more than two columns exist), to blunt outlier columns such
/// as a well kept open for an I piece.
fn trimmed_mean(tops: &[i32; BOARD_COLS]) -> f32 {
    let sum: i32 = tops.iter().sum();
    if BOARD_COLS > 2 {
        let min = *tops.iter().min().unwrap_or(&0);
        let max = *tops.iter().max().unwrap_or(&0);
        (sum - min - max) as f32 / (BOARD_COLS - 2) as f32
    } else {
        sum as f32 / BOARD_COLS as f32
    }
}

/// Score a resulting board plus the attack value of the move that produced
/// it. Higher is better; the result is the truncated integer total.
pub fn evaluate(board: &Board, attack: f32, weights: &EvalWeights) -> i32 {
    let tops = column_tops(board);

    let holes = count_holes(board, &tops);
    let hole_term = weights.hole * holes as f32;

    let bumpiness: i32 = tops.windows(2).map(|w| (w[0] - w[1]).abs()).sum();
    let bumpiness_term = weights.bumpiness * bumpiness as f32;

    let mean = trimmed_mean(&tops);
    let band_distance = if mean < weights.band_low {
        weights.band_low - mean
    } else if mean > weights.band_high {
        mean - weights.band_high
    } else {
        0.0
    };
    let target_height_term =
        weights.target_height * band_distance * band_distance / BOARD_ROWS as f32;

    let variance: f32 = tops.iter().map(|&t| (t as f32 - mean).powi(2)).sum();
    let variance_term = weights.variance * variance / weights.variance_normalizer;

    let total = hole_term + bumpiness_term + target_height_term + variance_term + attack.trunc();
    total as i32
}
