use thiserror::Error;

use crate::cards::Card;

/// Input-side validation failures. Reported before any search starts; a
/// malformed deal never reaches the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("unrecognized rank token '{0}'")]
    UnknownToken(String),

    #[error("expected 52 rank tokens, found {found}")]
    TokenCount { found: usize },

    #[error("rank {rank} appears {count} times, expected exactly 4")]
    RankMultiplicity { rank: Card, count: usize },
}

/// Internal defects surfaced during the search. These are unrecoverable:
/// none of them can occur for a valid deal unless the engine itself is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("state key {key} outside table range 0..{size}")]
    KeyOutOfRange { key: u64, size: u64 },

    #[error("remaining score exceeds the i16 score range")]
    ScoreOverflow,

    #[error("reconstruction diverged from the memoized optimum after {events} events")]
    TraceDiverged { events: usize },
}
