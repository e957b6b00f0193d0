#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod cards;
pub mod error;
pub mod index;
pub mod state;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::cards::{parse_deal, Card, Deal};
pub use crate::engine::apply::{apply_clear, apply_play};
pub use crate::engine::score::points_of;
pub use crate::error::{DealError, SolverError};
pub use crate::index::{state_key, TABLE_SIZE};
pub use crate::solver::{solve, SolveOutcome, Solver, TraceEvent};
pub use crate::state::PlayState;
