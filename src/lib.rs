//! blockpilot (workspace facade crate).
//!
//! This package keeps a single `blockpilot::{core,engine,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use blockpilot_core as core;
pub use blockpilot_engine as engine;
pub use blockpilot_types as types;
