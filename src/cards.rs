use std::fmt;

use serde::Serialize;

use crate::error::DealError;

/// Number of piles in a deal.
pub const PILES: usize = 4;
/// Cards per pile.
pub const PILE_SIZE: usize = 13;

/// Rank tokens in rank order (index 0 = ace).
pub const RANK_TOKENS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A card is just its rank, 1..=13. Suits never matter during the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Card(u8);

impl Card {
    /// Construct from a rank in 1..=13.
    #[inline]
    pub fn new(rank: u8) -> Option<Self> {
        (1..=13).contains(&rank).then_some(Self(rank))
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0
    }

    /// Count contributed to the stack total: 10 and face cards all count 10.
    #[inline]
    pub fn value(self) -> u8 {
        self.0.min(10)
    }

    #[inline]
    pub fn is_jack(self) -> bool {
        self.0 == 11
    }

    pub fn from_token(token: &str) -> Result<Self, DealError> {
        RANK_TOKENS
            .iter()
            .position(|&t| t == token)
            .map(|i| Self(i as u8 + 1))
            .ok_or_else(|| DealError::UnknownToken(token.to_string()))
    }

    #[inline]
    pub fn token(self) -> &'static str {
        RANK_TOKENS[self.0 as usize - 1]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A full deal: four piles of thirteen cards, front (slot 0) = next playable
/// card. Built once after validation, read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    piles: [[Card; PILE_SIZE]; PILES],
}

impl Deal {
    /// Validating constructor: every rank must appear exactly four times
    /// across the 52 cards.
    pub fn new(piles: [[Card; PILE_SIZE]; PILES]) -> Result<Self, DealError> {
        let mut counts = [0usize; 14];
        for pile in &piles {
            for card in pile {
                counts[card.rank() as usize] += 1;
            }
        }
        for rank in 1u8..=13 {
            let count = counts[rank as usize];
            if count != 4 {
                return Err(DealError::RankMultiplicity {
                    rank: Card(rank),
                    count,
                });
            }
        }
        Ok(Self { piles })
    }

    /// Card at play-order position `slot` of `pile`.
    #[inline]
    pub fn card(&self, pile: usize, slot: usize) -> Card {
        self.piles[pile][slot]
    }
}

/// Parse a deal from 52 whitespace-separated rank tokens: four groups of 13,
/// each group listed from the top of its pile to the bottom. Each pile is
/// reversed on ingest so that its front is the next playable card.
pub fn parse_deal(input: &str) -> Result<Deal, DealError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != PILES * PILE_SIZE {
        return Err(DealError::TokenCount {
            found: tokens.len(),
        });
    }
    let mut piles = [[Card(1); PILE_SIZE]; PILES];
    for (i, token) in tokens.iter().enumerate() {
        let card = Card::from_token(token)?;
        piles[i / PILE_SIZE][PILE_SIZE - 1 - i % PILE_SIZE] = card;
    }
    Deal::new(piles)
}
