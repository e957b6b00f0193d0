use crate::cards::{Card, Deal, PILES, PILE_SIZE};

/// How many recent play origins are remembered. Six prior cards plus the
/// candidate card cover the longest scorable run (seven).
pub const HISTORY_CAP: usize = 6;

/// Bounded window of the pile each of the last up-to-six plays came from,
/// oldest first. Fixed-capacity array with an explicit length; pushing onto a
/// full window evicts the oldest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct History {
    slots: [u8; HISTORY_CAP],
    len: u8,
}

impl History {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pile index of entry `i`, oldest first. `i` must be < `len()`.
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        debug_assert!(i < self.len());
        self.slots[i]
    }

    #[inline]
    pub fn push(&mut self, pile: u8) {
        debug_assert!((pile as usize) < PILES);
        if self.len() == HISTORY_CAP {
            self.slots.copy_within(1.., 0);
            self.slots[HISTORY_CAP - 1] = pile;
        } else {
            self.slots[self.len()] = pile;
            self.len += 1;
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Compressed game position. Cursors, stack total and the history window are
/// all the search needs: the ranks of the last up-to-six stack cards are
/// derivable from `history` and `played` against the fixed deal, which is
/// what keeps the state key space small.
///
/// A value type: every transition produces a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayState {
    /// Cards played so far from each pile, each in 0..=13.
    pub played: [u8; PILES],
    /// Running total of the current stack, 0..=31.
    pub stack_sum: u8,
    /// Origin piles of the most recent plays since the last clear.
    pub history: History,
}

impl PlayState {
    /// Initial position: nothing played, empty stack.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal iff every pile is exhausted.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.played.iter().all(|&n| n as usize == PILE_SIZE)
    }

    /// Next unplayed card of `pile`, if any remain.
    #[inline]
    pub fn top_card(&self, deal: &Deal, pile: usize) -> Option<Card> {
        let slot = self.played[pile] as usize;
        (slot < PILE_SIZE).then(|| deal.card(pile, slot))
    }

    /// A play from `pile` is legal iff cards remain and the stack total
    /// stays at or below 31.
    #[inline]
    pub fn is_legal(&self, deal: &Deal, pile: usize) -> bool {
        match self.top_card(deal, pile) {
            Some(card) => self.stack_sum + card.value() <= 31,
            None => false,
        }
    }

    /// Ranks of the last `history.len()` stack cards, most recent first,
    /// written into `out`. Returns how many were written.
    ///
    /// Walks the history newest-to-oldest, rewinding a per-pile cursor copy:
    /// the card a pile contributed k plays ago is fixed by how many of its
    /// cards had been played at that point.
    ///
    /// `history` must be consistent with `played`: no pile may appear in the
    /// window more often than it has cards played. States built through
    /// [`crate::apply_play`]/[`crate::apply_clear`] always satisfy this;
    /// hand-assembled states are the caller's responsibility.
    pub fn recent_ranks(&self, deal: &Deal, out: &mut [u8; HISTORY_CAP]) -> usize {
        let n = self.history.len();
        let mut cursors = self.played;
        for (k, slot) in out.iter_mut().enumerate().take(n) {
            let pile = self.history.get(n - 1 - k) as usize;
            debug_assert!(cursors[pile] > 0, "history entry without a matching play");
            cursors[pile] -= 1;
            *slot = deal.card(pile, cursors[pile] as usize).rank();
        }
        n
    }
}
