//! Per-game statistics.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Why a game stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Still running (only seen mid-game).
    #[default]
    InProgress,
    /// One player ran out of cards.
    Exhausted,
    /// The trick ceiling was reached.
    TrickLimit,
    /// The simulated time ceiling was reached.
    TimeLimit,
}

/// Statistics collected over one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// 1-based position in the batch (0 outside a batch).
    pub game_number: u32,

    /// Seed of the game's RNG stream; replays the game exactly.
    pub seed: u64,

    pub tricks: u32,

    /// War resolutions, counting each nested level.
    pub wars: u32,

    /// Wars whose face-up cards tied again.
    pub deep_wars: u32,

    /// Sum of the depth of every war resolution.
    pub total_war_depth: u32,

    pub reshuffles: PlayerMap<u32>,

    pub trick_wins: PlayerMap<u32>,

    /// Elapsed simulated time (ms).
    pub elapsed_ms: u64,

    /// A player ran out of cards.
    pub finished: bool,

    /// Set only when `finished`.
    pub winner: Option<PlayerId>,

    pub termination: Termination,
}

impl GameStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean depth of the wars fought, 0 if there were none.
    #[must_use]
    pub fn average_war_depth(&self) -> f64 {
        if self.wars == 0 {
            0.0
        } else {
            self.total_war_depth as f64 / self.wars as f64
        }
    }

    /// Elapsed simulated time in minutes.
    #[must_use]
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_ms as f64 / 60_000.0
    }
}
