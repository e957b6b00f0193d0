use std::fmt;

use serde::Serialize;

use crate::cards::Card;

pub mod search;
pub mod table;

pub use search::{solve, Solver};
pub use table::{DenseTable, ScoreTable, SparseTable};

/// One step of the reconstructed optimal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A card was played from `pile` (0-based), scoring `points` for a
    /// running `total`.
    Play {
        pile: u8,
        card: Card,
        points: u8,
        total: i16,
    },
    /// No pile could be played; the stack was cleared for no points.
    Clear,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Play {
                pile,
                card,
                points,
                total,
            } => write!(
                f,
                "play {} from pile {} scoring {} (total {})",
                card,
                pile + 1,
                points,
                total
            ),
            TraceEvent::Clear => f.write_str("stack cleared"),
        }
    }
}

/// Result of a solve: the optimal total and one play-by-play line that
/// achieves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome {
    pub best_score: i16,
    pub log: Vec<TraceEvent>,
}
