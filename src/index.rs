//! Dense integer key for a [`PlayState`], used to address the flat memo
//! table.
//!
//! The key is a mixed-radix number, least-significant digit first:
//!
//! - digits 0..=5: the history window entries (radix 4), absent trailing
//!   entries written as 0
//! - digit 6: the stack total (radix 32)
//! - digits 7..=10: the four pile cursors (radix 14, cursors run 0..=13)
//!
//! Each field occupies a disjoint fixed-width digit range, so two states
//! differing in any field get different keys. Trailing don't-care history
//! digits are safe: two reachable states with identical cursors and stack
//! total cannot disagree only in history entries the encoding treats as
//! absent (see DESIGN.md for the argument).

use crate::state::{PlayState, HISTORY_CAP};

/// Radix of one history digit: one of four piles.
pub const HISTORY_RADIX: u64 = 4;
/// Radix of the stack-total digit: totals run 0..=31.
pub const SUM_RADIX: u64 = 32;
/// Radix of one cursor digit: cursors run 0..=13.
pub const CURSOR_RADIX: u64 = 14;

/// Total key space: 4^6 * 32 * 14^4 = 5_035_261_952. Most keys are
/// unreachable; the mapping only has to be injective over reachable states.
pub const TABLE_SIZE: u64 = HISTORY_RADIX.pow(6) * SUM_RADIX * CURSOR_RADIX.pow(4);

/// Pack a state into its key. Always in `[0, TABLE_SIZE)` when the state
/// invariants hold; the solver re-checks the bound and reports a
/// [`crate::SolverError::KeyOutOfRange`] defect instead of indexing wild.
pub fn state_key(state: &PlayState) -> u64 {
    let mut key = 0u64;
    let mut place = 1u64;
    for i in 0..HISTORY_CAP {
        if i < state.history.len() {
            key += u64::from(state.history.get(i)) * place;
        }
        place *= HISTORY_RADIX;
    }
    key += u64::from(state.stack_sum) * place;
    place *= SUM_RADIX;
    for &cursor in &state.played {
        key += u64::from(cursor) * place;
        place *= CURSOR_RADIX;
    }
    key
}
