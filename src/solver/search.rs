use crate::cards::{Deal, PILES};
use crate::engine::apply::{apply_clear, apply_play};
use crate::engine::score::points_of;
use crate::error::SolverError;
use crate::index::{state_key, TABLE_SIZE};
use crate::state::PlayState;

use super::table::{DenseTable, ScoreTable, SparseTable};
use super::{SolveOutcome, TraceEvent};

/// Search context: the fixed deal plus the memo table. Owns all mutable
/// search state for one run; constructed after input validation, dropped at
/// the end.
pub struct Solver<'d, T> {
    deal: &'d Deal,
    table: T,
}

impl<'d> Solver<'d, DenseTable> {
    /// Full-key-space flat table (~10 GiB). The configuration for solving a
    /// whole deal from the initial state.
    pub fn new_dense(deal: &'d Deal) -> Self {
        Self::with_table(deal, DenseTable::new())
    }
}

impl<'d> Solver<'d, SparseTable> {
    /// Hash-map table, for bounded searches from late-game states.
    pub fn new_sparse(deal: &'d Deal) -> Self {
        Self::with_table(deal, SparseTable::new())
    }
}

impl<'d, T: ScoreTable> Solver<'d, T> {
    pub fn with_table(deal: &'d Deal, table: T) -> Self {
        Self { deal, table }
    }

    #[inline]
    pub fn table(&self) -> &T {
        &self.table
    }

    #[inline]
    fn checked_key(&self, state: &PlayState) -> Result<u64, SolverError> {
        let key = state_key(state);
        if key >= TABLE_SIZE {
            return Err(SolverError::KeyOutOfRange {
                key,
                size: TABLE_SIZE,
            });
        }
        Ok(key)
    }

    /// Best achievable score over the rest of the game from `state`.
    ///
    /// Memoized maximization over a DAG: each transition strictly shrinks
    /// the remaining plays-plus-clears, so recursion terminates and depth
    /// stays within a few dozen frames.
    pub fn best_remaining(&mut self, state: &PlayState) -> Result<i16, SolverError> {
        if state.is_done() {
            return Ok(0);
        }
        let key = self.checked_key(state)?;
        if let Some(value) = self.table.get(key) {
            return Ok(value);
        }

        let mut best: i32 = -1;
        for pile in 0..PILES {
            if state.is_legal(self.deal, pile) {
                let points = points_of(self.deal, state, pile);
                let rest = self.best_remaining(&apply_play(self.deal, state, pile))?;
                best = best.max(i32::from(points) + i32::from(rest));
            }
        }
        // No playable pile: the only continuation is a fresh stack.
        if best < 0 {
            best = i32::from(self.best_remaining(&apply_clear(state))?);
        }

        let value = i16::try_from(best).map_err(|_| SolverError::ScoreOverflow)?;
        self.table.put(key, value);
        Ok(value)
    }

    /// Compute the optimum from `start`, then re-walk the now-populated
    /// table to extract one line achieving it: at each step take the first
    /// pile (0..3) whose play preserves the global optimum, falling back to
    /// a clear. The accumulated score is checked against the optimum at
    /// every step; a mismatch is an engine defect, not a game condition.
    pub fn solve_from(&mut self, start: &PlayState) -> Result<SolveOutcome, SolverError> {
        let best = self.best_remaining(start)?;

        let mut log = Vec::new();
        let mut state = *start;
        let mut total: i16 = 0;
        while !state.is_done() {
            if total + self.best_remaining(&state)? != best {
                return Err(SolverError::TraceDiverged { events: log.len() });
            }

            let mut advanced = false;
            for pile in 0..PILES {
                if !state.is_legal(self.deal, pile) {
                    continue;
                }
                let points = points_of(self.deal, &state, pile);
                let next = apply_play(self.deal, &state, pile);
                if total + i16::from(points) + self.best_remaining(&next)? == best {
                    let card = self.deal.card(pile, state.played[pile] as usize);
                    total += i16::from(points);
                    log.push(TraceEvent::Play {
                        pile: pile as u8,
                        card,
                        points,
                        total,
                    });
                    state = next;
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                let cleared = apply_clear(&state);
                if total + self.best_remaining(&cleared)? != best {
                    return Err(SolverError::TraceDiverged { events: log.len() });
                }
                log.push(TraceEvent::Clear);
                state = cleared;
            }
        }

        debug_assert_eq!(total, best);
        Ok(SolveOutcome {
            best_score: best,
            log,
        })
    }
}

/// Solve a whole deal from the initial position with the flat table.
pub fn solve(deal: &Deal) -> Result<SolveOutcome, SolverError> {
    Solver::new_dense(deal).solve_from(&PlayState::new())
}
