//! Two-ply placement search.
//!
//! Enumerates every legal resting placement of the active piece, simulates
//! each one (stamp, clear, attack score), evaluates the resulting board, and
//! optionally extends one ply with the known next piece. The placement with
//! the highest combined score wins; strict `>` comparison keeps the first
//! enumerated candidate on ties, so results are stable for a given state.

use blockpilot_core::rules::{attack_score, clear_lines, enumerate_moves, place_block};
use blockpilot_core::{masks, Board, GameState, RotationMask, RulesError};
use blockpilot_types::{PieceKind, Placement};

use crate::eval::{evaluate, EvalWeights};

/// Search configuration: evaluator weights plus the second-ply dead-end
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchConfig {
    pub weights: EvalWeights,
    /// Score contribution of the second ply when the next piece has no legal
    /// placement on a candidate's resulting board. The default of 0 excludes
    /// the second ply for that branch; set a negative value to steer away
    /// from near-terminal stacks instead.
    pub dead_end_penalty: i32,
}

/// Why a search produced no placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Precondition violation: the state has no current piece. The control
    /// loop should skip this cycle and retry once recognition catches up.
    NoCurrentPiece,
    /// The board admits no legal placement for the current piece in any
    /// orientation - effectively a terminal board, not an internal error.
    NoLegalPlacement,
    /// A pre-validated placement failed simulation. Indicates a bug in move
    /// enumeration; surfaced loudly instead of being swallowed.
    Simulation(RulesError),
}

impl std::error::Error for SearchError {}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NoCurrentPiece => write!(f, "no current piece set in game state"),
            SearchError::NoLegalPlacement => {
                write!(f, "no legal placement for the current piece")
            }
            SearchError::Simulation(err) => {
                write!(f, "simulation failed for an enumerated placement: {err}")
            }
        }
    }
}

impl From<RulesError> for SearchError {
    fn from(err: RulesError) -> Self {
        SearchError::Simulation(err)
    }
}

/// Apply one placement to a copy of `board`: stamp the mask, clear full
/// rows, and look up the attack score of the move. Returns the resulting
/// board and that attack score.
pub fn simulate_placement(
    board: &Board,
    mask: &RotationMask,
    row: i8,
    col: i8,
) -> Result<(Board, f32), RulesError> {
    let stamped = place_block(board, mask, row, col)?;
    let (after, cleared) = clear_lines(&stamped);
    Ok((after, attack_score(cleared)))
}

/// Pick the best placement for the state's current piece.
///
/// First ply: every legal placement of the current piece is simulated and
/// the resulting board evaluated. Second ply: when the next piece is known,
/// each candidate's resulting board is searched the same way for the next
/// piece and the best second-ply evaluation is added (dead ends contribute
/// [`SearchConfig::dead_end_penalty`]). The candidate with the highest total
/// wins; ties keep the earliest enumerated placement (orientation-major,
/// column ascending).
pub fn search(state: &GameState, config: &SearchConfig) -> Result<Placement, SearchError> {
    let current = state.current_piece().ok_or(SearchError::NoCurrentPiece)?;

    let moves = enumerate_moves(state.board(), current);
    if moves.is_empty() {
        return Err(SearchError::NoLegalPlacement);
    }

    let mut best: Option<(i32, Placement)> = None;

    for placement in moves {
        let mask = &masks(current)[placement.spin];
        let (after, attack) =
            simulate_placement(state.board(), mask, placement.row, placement.col)?;
        let mut total = evaluate(&after, attack, &config.weights);

        if let Some(next) = state.next_piece() {
            total += best_reply_score(&after, next, config)?;
        }

        match best {
            Some((best_score, _)) if total <= best_score => {}
            _ => best = Some((total, placement)),
        }
    }

    // Non-empty move list always yields a winner.
    best.map(|(_, placement)| placement)
        .ok_or(SearchError::NoLegalPlacement)
}

/// Best second-ply evaluation of `kind` on `board`, or the dead-end penalty
/// if it cannot be placed at all.
fn best_reply_score(
    board: &Board,
    kind: PieceKind,
    config: &SearchConfig,
) -> Result<i32, SearchError> {
    let mut best: Option<i32> = None;

    for placement in enumerate_moves(board, kind) {
        let mask = &masks(kind)[placement.spin];
        let (after, attack) = simulate_placement(board, mask, placement.row, placement.col)?;
        let score = evaluate(&after, attack, &config.weights);
        if best.map_or(true, |b| score > b) {
            best = Some(score);
        }
    }

    Ok(best.unwrap_or(config.dead_end_penalty))
}
