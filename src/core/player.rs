//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! War is strictly two-handed: `PlayerId::A` and `PlayerId::B`.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players at a War table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier. Index 0 is player A, index 1 is player B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player. Wins timeout tie-breaks.
    pub const A: PlayerId = PlayerId(0);
    /// The second player.
    pub const B: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Short label used in tables: `A` or `B`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "A",
            _ => "B",
        }
    }

    /// Iterate over both players, A first.
    ///
    /// ```
    /// use war_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::A, PlayerId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::A, PlayerId::B].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.label())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use war_sim::core::{PlayerId, PlayerMap};
///
/// let mut shuffles: PlayerMap<u32> = PlayerMap::default();
/// shuffles[PlayerId::B] += 1;
///
/// assert_eq!(shuffles[PlayerId::A], 0);
/// assert_eq!(shuffles[PlayerId::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a PlayerMap from explicit values for A and B.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
