//! A player's two piles: the draw pile and the winnings pile.
//!
//! Cards are played from the front of the draw pile. Won cards are
//! appended to the winnings pile. When the draw pile runs dry the
//! winnings become the new draw pile after a shuffle.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// A card taken from a player's piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawn {
    pub card: Card,
    /// The winnings pile was shuffled into the draw pile to produce this card.
    pub reshuffled: bool,
}

/// One player's cards.
///
/// `total()` is the number of cards the player still owns; cards committed
/// to a trick or war in progress are owned by neither player until awarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPiles {
    draw: VecDeque<Card>,
    winnings: Vec<Card>,
}

impl PlayerPiles {
    /// Create piles with `cards` as the draw pile (front is played first).
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            winnings: Vec::new(),
        }
    }

    /// Create piles from an explicit draw pile and winnings pile.
    #[must_use]
    pub fn with_winnings(
        draw: impl IntoIterator<Item = Card>,
        winnings: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            draw: draw.into_iter().collect(),
            winnings: winnings.into_iter().collect(),
        }
    }

    /// Cards in the draw pile, front first.
    pub fn draw_pile(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.draw.iter()
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn winnings(&self) -> &[Card] {
        &self.winnings
    }

    /// Cards owned: draw pile plus winnings.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.winnings.len()
    }

    /// The player holds no cards at all.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw.is_empty() && self.winnings.is_empty()
    }

    /// Take the next card, reshuffling winnings into the draw pile if needed.
    ///
    /// Returns `None` when the player has no cards left.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<Drawn> {
        if let Some(card) = self.draw.pop_front() {
            return Some(Drawn {
                card,
                reshuffled: false,
            });
        }
        if self.winnings.is_empty() {
            return None;
        }

        self.draw.extend(self.winnings.drain(..));
        rng.shuffle(self.draw.make_contiguous());

        self.draw.pop_front().map(|card| Drawn {
            card,
            reshuffled: true,
        })
    }

    /// Add won cards to the back of the winnings pile.
    pub fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.winnings.extend(cards);
    }
}
