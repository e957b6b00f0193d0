use crate::cards::Deal;
use crate::state::{PlayState, HISTORY_CAP};

/// Immediate points for playing the top card of `pile`, before any recursion.
/// Precondition: `state.is_legal(deal, pile)`.
///
/// Bonuses are independent and add up:
/// - jack led onto an empty stack: 2
/// - new stack total exactly 15 or exactly 31: 2 each
/// - pair / triple / quad with the cards directly under it: 2 / 6 / 12
/// - longest run of length >= 3 ending in the new card: its length
pub fn points_of(deal: &Deal, state: &PlayState, pile: usize) -> u8 {
    debug_assert!(state.is_legal(deal, pile));
    let card = deal.card(pile, state.played[pile] as usize);
    let rank = card.rank();
    let new_sum = state.stack_sum + card.value();

    let mut points = 0u8;
    if card.is_jack() && state.stack_sum == 0 {
        points += 2;
    }
    if new_sum == 15 {
        points += 2;
    }
    if new_sum == 31 {
        points += 2;
    }

    let mut recent = [0u8; HISTORY_CAP];
    let n = state.recent_ranks(deal, &mut recent);

    // Sets: consecutive equal ranks directly under the new card.
    let mut matched = 0;
    while matched < n && recent[matched] == rank {
        matched += 1;
    }
    points += match matched {
        0 => 0,
        1 => 2,  // pair
        2 => 6,  // triple
        _ => 12, // quad; a fifth equal rank cannot exist
    };

    // Runs: grow the window one prior card at a time. A window of size `sz`
    // is a run iff all ranks are distinct and max - min == sz - 1. A
    // duplicate rank ends the growth for good, so the largest qualifying
    // size wins. With six prior cards the longest scorable run is seven.
    let mut seen = [false; 14];
    seen[rank as usize] = true;
    let mut lo = rank;
    let mut hi = rank;
    let mut best_run = 0usize;
    for sz in 2..=HISTORY_CAP + 1 {
        if sz - 1 > n {
            break;
        }
        let prior = recent[sz - 2];
        if seen[prior as usize] {
            break;
        }
        seen[prior as usize] = true;
        lo = lo.min(prior);
        hi = hi.max(prior);
        if (hi - lo) as usize == sz - 1 {
            best_run = sz;
        }
    }
    if best_run >= 3 {
        points += best_run as u8;
    }

    points
}
