use crate::cards::Deal;
use crate::state::PlayState;

/// Apply a play from `pile` as a pure transform: cursor advances, the card's
/// value joins the stack total, and the origin pile enters the history
/// window. Precondition: `state.is_legal(deal, pile)`.
#[inline]
pub fn apply_play(deal: &Deal, state: &PlayState, pile: usize) -> PlayState {
    debug_assert!(state.is_legal(deal, pile));
    let card = deal.card(pile, state.played[pile] as usize);
    let mut next = *state;
    next.played[pile] += 1;
    next.stack_sum += card.value();
    next.history.push(pile as u8);
    next
}

/// Start a fresh stack: total back to zero, history emptied, cursors kept.
/// The solver reaches for this only when no pile is playable.
#[inline]
pub fn apply_clear(state: &PlayState) -> PlayState {
    let mut next = *state;
    next.stack_sum = 0;
    next.history.clear();
    next
}
