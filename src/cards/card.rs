//! Playing cards.
//!
//! Only the rank matters in War, so suits are not modelled: two cards of
//! the same rank are equal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rank outside `2..=15`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid card rank {0}, expected 2..=15")]
pub struct InvalidRank(pub u8);

/// A card, identified by rank alone.
///
/// Ranks run 2 (Two) through 14 (Ace); 15 is a joker. Serialized as the
/// bare rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card {
    rank: u8,
}

impl Card {
    /// Lowest rank (Two).
    pub const MIN_RANK: u8 = 2;
    /// Highest natural rank (Ace).
    pub const ACE: u8 = 14;
    /// Joker rank. Beats every natural card.
    pub const JOKER: u8 = 15;

    /// Create a card of the given rank.
    ///
    /// Panics if `rank` is outside `2..=15`.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        assert!(rank >= Self::MIN_RANK && rank <= Self::JOKER, "rank must be 2..=15");
        Self { rank }
    }

    /// A joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self { rank: Self::JOKER }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.rank == Self::JOKER
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidRank;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        if (Self::MIN_RANK..=Self::JOKER).contains(&rank) {
            Ok(Self { rank })
        } else {
            Err(InvalidRank(rank))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            14 => write!(f, "A"),
            15 => write!(f, "Joker"),
            n => write!(f, "{}", n),
        }
    }
}
