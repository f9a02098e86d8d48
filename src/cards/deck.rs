//! Deck construction and shuffling.

use super::card::Card;
use crate::core::rng::GameRng;

/// Copies of each natural rank (one per suit).
pub const SUITS: usize = 4;

/// Jokers added when enabled.
pub const JOKERS: usize = 2;

/// Number of cards `build` produces.
#[must_use]
pub const fn deck_size(include_jokers: bool) -> usize {
    let natural = (Card::ACE - Card::MIN_RANK + 1) as usize * SUITS;
    if include_jokers {
        natural + JOKERS
    } else {
        natural
    }
}

/// Build an unshuffled deck: four of each rank 2..=14 in ascending order,
/// followed by two jokers if requested.
#[must_use]
pub fn build(include_jokers: bool) -> Vec<Card> {
    let mut deck = Vec::with_capacity(deck_size(include_jokers));
    for rank in Card::MIN_RANK..=Card::ACE {
        deck.extend(std::iter::repeat(Card::new(rank)).take(SUITS));
    }
    if include_jokers {
        deck.extend(std::iter::repeat(Card::joker()).take(JOKERS));
    }
    deck
}

/// Uniformly permute `cards` in place.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}
