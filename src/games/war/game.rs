//! War game engine.

use std::cmp::Ordering;

use log::{debug, trace, warn};
use smallvec::SmallVec;

use super::stats::{GameStats, Termination};
use crate::cards::{deck, Card};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};
use crate::zones::PlayerPiles;

/// Cards each player puts down per war level: three face-down, one face-up.
pub const WAR_DRAW: usize = 4;

/// Cards on the table during a trick, including every war level.
pub type WarPile = SmallVec<[Card; 16]>;

/// A single game of War between players A and B.
///
/// The game exclusively owns both players' piles, its RNG stream and its
/// statistics. Drive it with [`WarGame::play`], or trick by trick with
/// [`WarGame::is_over`] and [`WarGame::play_trick`].
#[derive(Clone, Debug)]
pub struct WarGame {
    config: GameConfig,
    piles: PlayerMap<PlayerPiles>,
    rng: GameRng,
    stats: GameStats,
    deck_size: usize,
}

impl WarGame {
    /// Deal a freshly shuffled deck, half to each player.
    pub fn new(config: GameConfig, mut rng: GameRng) -> Self {
        let mut cards = deck::build(config.include_jokers);
        deck::shuffle(&mut cards, &mut rng);
        let hand_b = cards.split_off(cards.len() / 2);
        Self::with_hands(config, cards, hand_b, rng)
    }

    /// Start from explicit hands. The front of each hand is played first.
    pub fn with_hands(
        config: GameConfig,
        hand_a: impl IntoIterator<Item = Card>,
        hand_b: impl IntoIterator<Item = Card>,
        rng: GameRng,
    ) -> Self {
        let piles = PlayerMap::from_pair(PlayerPiles::new(hand_a), PlayerPiles::new(hand_b));
        Self::with_piles(config, piles, rng)
    }

    /// Start from arbitrary piles, e.g. a mid-game position.
    pub fn with_piles(config: GameConfig, piles: PlayerMap<PlayerPiles>, rng: GameRng) -> Self {
        let deck_size = piles.iter().map(|(_, p)| p.total()).sum();
        let stats = GameStats {
            seed: rng.seed(),
            ..GameStats::default()
        };
        Self {
            config,
            piles,
            rng,
            stats,
            deck_size,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn piles(&self, player: PlayerId) -> &PlayerPiles {
        &self.piles[player]
    }

    /// Statistics so far.
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Elapsed simulated time (ms).
    pub fn elapsed_ms(&self) -> u64 {
        self.stats.elapsed_ms
    }

    /// Cards held by both players. Equals `deck_size()` between tricks.
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|(_, p)| p.total()).sum()
    }

    /// Cards in play when the game started.
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// First player found with no cards left, A checked first.
    pub fn exhausted_player(&self) -> Option<PlayerId> {
        PlayerId::all().find(|&p| self.piles[p].is_exhausted())
    }

    /// No further trick will be played.
    pub fn is_over(&self) -> bool {
        self.exhausted_player().is_some()
            || self.stats.tricks >= self.config.max_tricks
            || self.out_of_time()
    }

    // A trick only starts if its hand cost still fits in the budget.
    fn out_of_time(&self) -> bool {
        let max = self.config.max_game_time_ms;
        self.stats.elapsed_ms >= max
            || self.stats.elapsed_ms.saturating_add(self.config.hand_time_ms) > max
    }

    /// Play tricks until the game is over and return the final statistics.
    pub fn play(mut self) -> GameStats {
        while !self.is_over() {
            self.play_trick();
        }
        self.into_stats()
    }

    /// Play one trick. Returns the player who took the cards.
    ///
    /// Callers check [`WarGame::is_over`] first; a trick against an
    /// exhausted opponent is won by default.
    pub fn play_trick(&mut self) -> Option<PlayerId> {
        self.stats.tricks += 1;
        self.charge(self.config.hand_time_ms);

        let card_a = self.draw(PlayerId::A);
        let card_b = self.draw(PlayerId::B);

        let mut pile = WarPile::new();
        pile.extend(card_a);
        pile.extend(card_b);

        let winner = match (card_a, card_b) {
            (Some(a), Some(b)) => match a.rank().cmp(&b.rank()) {
                Ordering::Greater => PlayerId::A,
                Ordering::Less => PlayerId::B,
                Ordering::Equal => self.resolve_war(&mut pile, 1),
            },
            (Some(_), None) => PlayerId::A,
            (None, Some(_)) => PlayerId::B,
            (None, None) => return None,
        };

        trace!(
            "trick {}: {} takes {} cards ({} vs {})",
            self.stats.tricks,
            winner,
            pile.len(),
            self.piles[PlayerId::A].total(),
            self.piles[PlayerId::B].total(),
        );

        self.stats.trick_wins[winner] += 1;
        self.piles[winner].collect(pile);

        debug_assert_eq!(self.total_cards(), self.deck_size, "cards created or lost");
        Some(winner)
    }

    /// Resolve a tie. Every card put down is pushed onto `pile`; the
    /// returned player takes the whole pile.
    fn resolve_war(&mut self, pile: &mut WarPile, depth: u32) -> PlayerId {
        self.stats.wars += 1;
        self.stats.total_war_depth += depth;
        self.charge(self.config.hand_time_ms);

        if self.stats.elapsed_ms >= self.config.max_game_time_ms {
            let leader = self.leader();
            debug!("war at depth {} cut off by time limit, awarded to {}", depth, leader);
            return leader;
        }

        let face_up_a = self.commit_war_cards(PlayerId::A, pile);
        let face_up_b = self.commit_war_cards(PlayerId::B, pile);

        let (a, b) = match (face_up_a, face_up_b) {
            (None, _) => return PlayerId::B,
            (_, None) => return PlayerId::A,
            (Some(a), Some(b)) => (a, b),
        };

        match a.rank().cmp(&b.rank()) {
            Ordering::Greater => PlayerId::A,
            Ordering::Less => PlayerId::B,
            Ordering::Equal => {
                self.stats.deep_wars += 1;
                debug!(
                    "deep war: {} ties again at depth {}, {} cards on the table",
                    a,
                    depth,
                    pile.len()
                );

                if let Some(out) = self.exhausted_player() {
                    return out.opponent();
                }
                self.resolve_war(pile, depth + 1)
            }
        }
    }

    /// Put down up to `WAR_DRAW` cards. The last card drawn is face-up and
    /// returned; `None` means the player had nothing to put down.
    fn commit_war_cards(&mut self, player: PlayerId, pile: &mut WarPile) -> Option<Card> {
        let mut face_up = None;
        for _ in 0..WAR_DRAW {
            let Some(card) = self.draw(player) else {
                break;
            };
            pile.push(card);
            face_up = Some(card);
        }
        face_up
    }

    /// Draw a card, charging for a reshuffle if one was needed.
    fn draw(&mut self, player: PlayerId) -> Option<Card> {
        let drawn = self.piles[player].draw_card(&mut self.rng)?;
        if drawn.reshuffled {
            self.stats.reshuffles[player] += 1;
            self.charge(self.config.shuffle_time_ms);
            debug!(
                "{} reshuffles {} cards (shuffle #{})",
                player,
                self.piles[player].total() + 1,
                self.stats.reshuffles[player],
            );
        }
        Some(drawn.card)
    }

    // Strictly more cards wins; A on equal counts.
    fn leader(&self) -> PlayerId {
        if self.piles[PlayerId::B].total() > self.piles[PlayerId::A].total() {
            PlayerId::B
        } else {
            PlayerId::A
        }
    }

    fn charge(&mut self, ms: u64) {
        self.stats.elapsed_ms = self.stats.elapsed_ms.saturating_add(ms);
    }

    /// Close the game and return its statistics.
    ///
    /// A zero time ceiling never yields a finished game, even when a
    /// player starts without cards.
    pub fn into_stats(mut self) -> GameStats {
        let no_time = self.config.max_game_time_ms == 0;
        match self.exhausted_player().filter(|_| !no_time) {
            Some(loser) => {
                self.stats.finished = true;
                self.stats.winner = Some(loser.opponent());
                self.stats.termination = Termination::Exhausted;
            }
            None => {
                self.stats.finished = false;
                self.stats.winner = None;
                let trick_limit = self.stats.tricks >= self.config.max_tricks;
                self.stats.termination = if trick_limit && !no_time {
                    Termination::TrickLimit
                } else {
                    Termination::TimeLimit
                };
                warn!(
                    "game exceeded {} tricks or {} ms; {} has {} cards, {} has {} cards",
                    self.config.max_tricks,
                    self.config.max_game_time_ms,
                    PlayerId::A,
                    self.piles[PlayerId::A].total(),
                    PlayerId::B,
                    self.piles[PlayerId::B].total(),
                );
            }
        }
        self.stats
    }
}

/// Deal, play and score one game.
pub fn play_game(config: &GameConfig, rng: GameRng) -> GameStats {
    WarGame::new(config.clone(), rng).play()
}
