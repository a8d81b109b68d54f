//! Core game rules for the blockpilot decision engine.
//!
//! Everything in this crate is pure and deterministic: boards are plain
//! values, rules functions never mutate their inputs, and the piece catalog
//! is a static lookup table. There are no dependencies on I/O, timing, or
//! the external capture/inject collaborators.
//!
//! # Module structure
//!
//! - [`board`]: 20x10 grid with (row, col) addressing
//! - [`catalog`]: rotation masks for the 7 tetromino kinds
//! - [`rules`]: collision, gravity drop, move enumeration, stamping, line
//!   clearing, attack scoring
//! - [`state`]: the board/current/next holder written by the recognizer and
//!   read by the search engine
//! - [`bag`]: seeded 7-bag piece generator for self-play and tests

pub mod bag;
pub mod board;
pub mod catalog;
pub mod rules;
pub mod state;

pub use blockpilot_types as types;

// Re-export commonly used types for convenience
pub use bag::{PieceBag, SimpleRng};
pub use board::Board;
pub use catalog::{masks, RotationMask};
pub use rules::{
    attack_score, clear_lines, drop_row, enumerate_moves, is_collision, place_block, RulesError,
};
pub use state::{GameState, StateError};
