//! Decision engine: position evaluation and two-ply placement search.
//!
//! Sits on top of `blockpilot-core`'s pure rules: [`eval`] scores a resulting
//! board, [`search`] enumerates and simulates candidate placements for the
//! active piece (and, when the preview is known, the next piece) and picks
//! the best one. Both are synchronous and allocation-light; a full two-ply
//! search over the reference board is a few thousand board simulations and
//! completes far inside the control loop's polling interval.

pub mod eval;
pub mod search;

pub use eval::{evaluate, EvalWeights};
pub use search::{search, simulate_placement, SearchConfig, SearchError};
