//! Deck builder and shuffle tests.
//!
//! These verify the deck contents and that shuffling is an unbiased
//! permutation.

use war_sim::cards::{build, deck_size, shuffle, Card};
use war_sim::core::GameRng;

/// Each card lands in each position with frequency close to 1/N.
#[test]
fn test_shuffle_position_uniformity() {
    const N: usize = 8;
    const TRIALS: usize = 40_000;

    let base: Vec<Card> = (2..2 + N as u8).map(Card::new).collect();
    let mut counts = [[0usize; N]; N];
    let mut rng = GameRng::new(2024);

    for _ in 0..TRIALS {
        let mut cards = base.clone();
        shuffle(&mut cards, &mut rng);
        for (position, card) in cards.iter().enumerate() {
            counts[(card.rank() - 2) as usize][position] += 1;
        }
    }

    // Binomial(40000, 1/8): mean 5000, sd ~66. Allow 6 sd.
    let expected = TRIALS / N;
    for row in &counts {
        for &count in row {
            assert!(
                count.abs_diff(expected) < 400,
                "count {} too far from {}",
                count,
                expected
            );
        }
    }
}

/// All 3! orderings of three distinct cards show up about equally often.
#[test]
fn test_shuffle_permutation_uniformity() {
    const TRIALS: usize = 60_000;

    let base = vec![Card::new(2), Card::new(3), Card::new(4)];
    let mut seen: Vec<(Vec<Card>, usize)> = Vec::new();
    let mut rng = GameRng::new(5);

    for _ in 0..TRIALS {
        let mut cards = base.clone();
        shuffle(&mut cards, &mut rng);
        match seen.iter_mut().find(|(order, _)| *order == cards) {
            Some((_, count)) => *count += 1,
            None => seen.push((cards, 1)),
        }
    }

    assert_eq!(seen.len(), 6);
    // Binomial(60000, 1/6): mean 10000, sd ~91.
    for (_, count) in &seen {
        assert!(count.abs_diff(10_000) < 550, "count {}", count);
    }
}

#[test]
fn test_every_rank_four_times() {
    let deck = build(false);
    for rank in Card::MIN_RANK..=Card::ACE {
        assert_eq!(deck.iter().filter(|c| c.rank() == rank).count(), 4);
    }
    assert_eq!(deck_size(false), 52);
    assert_eq!(deck_size(true), 54);
}

#[test]
fn test_jokers_beat_aces() {
    let deck = build(true);
    let top = deck.iter().max().unwrap();
    assert!(top.is_joker());
    assert!(*top > Card::new(Card::ACE));
}
