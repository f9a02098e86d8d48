//! Simulation configuration.
//!
//! - `SimulationConfig`: the batch as requested by the caller (times may be
//!   negative here, so that malformed input can be represented and rejected)
//! - `GameConfig`: the validated per-game parameters the engine runs with
//!
//! Validation happens once, before any game is played.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Safety ceiling on tricks per game.
pub const DEFAULT_MAX_TRICKS: u32 = 100_000;

/// Rejected batch configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: &'static str, value: i64 },
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: i64 },
    #[error("games must be > 0")]
    NoGames,
}

/// Validated parameters for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Simulated cost of playing one hand (ms).
    pub hand_time_ms: u64,

    /// Simulated cost of one reshuffle (ms).
    pub shuffle_time_ms: u64,

    /// Add two jokers (rank 15) to the deck.
    pub include_jokers: bool,

    /// Hard ceiling on elapsed simulated time (ms).
    pub max_game_time_ms: u64,

    /// Hard ceiling on tricks played.
    pub max_tricks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_time_ms: 500,
            shuffle_time_ms: 15_000,
            include_jokers: false,
            max_game_time_ms: 3_600_000,
            max_tricks: DEFAULT_MAX_TRICKS,
        }
    }
}

impl GameConfig {
    /// Create a config with the default timings.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hand_time(mut self, ms: u64) -> Self {
        self.hand_time_ms = ms;
        self
    }

    #[must_use]
    pub fn with_shuffle_time(mut self, ms: u64) -> Self {
        self.shuffle_time_ms = ms;
        self
    }

    #[must_use]
    pub fn with_jokers(mut self, include: bool) -> Self {
        self.include_jokers = include;
        self
    }

    #[must_use]
    pub fn with_max_game_time(mut self, ms: u64) -> Self {
        self.max_game_time_ms = ms;
        self
    }

    #[must_use]
    pub fn with_max_tricks(mut self, tricks: u32) -> Self {
        self.max_tricks = tricks;
        self
    }
}

/// A batch of games as requested by the caller.
///
/// Defaults match the command-line defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulated cost of playing one hand (ms).
    pub hand_time_ms: i64,

    /// Simulated cost of one reshuffle (ms).
    pub shuffle_time_ms: i64,

    /// Add two jokers to the deck.
    pub include_jokers: bool,

    /// Seed for the batch RNG.
    pub seed: u64,

    /// Number of games to play.
    pub games: u32,

    /// Ceiling on simulated time per game (ms).
    pub max_game_time_ms: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hand_time_ms: 500,
            shuffle_time_ms: 15_000,
            include_jokers: false,
            seed: 0,
            games: 100,
            max_game_time_ms: 3_600_000,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hand_time(mut self, ms: i64) -> Self {
        self.hand_time_ms = ms;
        self
    }

    #[must_use]
    pub fn with_shuffle_time(mut self, ms: i64) -> Self {
        self.shuffle_time_ms = ms;
        self
    }

    #[must_use]
    pub fn with_jokers(mut self, include: bool) -> Self {
        self.include_jokers = include;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_max_game_time(mut self, ms: i64) -> Self {
        self.max_game_time_ms = ms;
        self
    }

    /// Check the batch and derive the per-game config.
    pub fn validate(&self) -> Result<GameConfig, ConfigError> {
        let hand_time_ms = non_negative("hand_time_ms", self.hand_time_ms)?;
        let shuffle_time_ms = non_negative("shuffle_time_ms", self.shuffle_time_ms)?;
        if self.max_game_time_ms <= 0 {
            return Err(ConfigError::NonPositive {
                field: "max_game_time_ms",
                value: self.max_game_time_ms,
            });
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }

        Ok(GameConfig {
            hand_time_ms,
            shuffle_time_ms,
            include_jokers: self.include_jokers,
            max_game_time_ms: self.max_game_time_ms.unsigned_abs(),
            max_tricks: DEFAULT_MAX_TRICKS,
        })
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| ConfigError::Negative { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let game = SimulationConfig::default().validate().unwrap();
        assert_eq!(game, GameConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new()
            .with_hand_time(250)
            .with_shuffle_time(0)
            .with_jokers(true)
            .with_seed(9)
            .with_games(3)
            .with_max_game_time(1_000);

        let game = config.validate().unwrap();
        assert_eq!(game.hand_time_ms, 250);
        assert_eq!(game.shuffle_time_ms, 0);
        assert!(game.include_jokers);
        assert_eq!(game.max_game_time_ms, 1_000);
        assert_eq!(game.max_tricks, DEFAULT_MAX_TRICKS);
    }

    #[test]
    fn test_negative_hand_time() {
        let err = SimulationConfig::new().with_hand_time(-1).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Negative {
                field: "hand_time_ms",
                value: -1
            }
        );
    }

    #[test]
    fn test_negative_shuffle_time() {
        let err = SimulationConfig::new().with_shuffle_time(-20).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Negative { field: "shuffle_time_ms", .. }));
    }

    #[test]
    fn test_non_positive_ceiling() {
        for bad in [0, -5] {
            let err = SimulationConfig::new().with_max_game_time(bad).validate().unwrap_err();
            assert!(matches!(err, ConfigError::NonPositive { field: "max_game_time_ms", .. }));
        }
    }

    #[test]
    fn test_zero_games() {
        let err = SimulationConfig::new().with_games(0).validate().unwrap_err();
        assert_eq!(err, ConfigError::NoGames);
        assert_eq!(err.to_string(), "games must be > 0");
    }

    #[test]
    fn test_error_message() {
        let err = SimulationConfig::new().with_max_game_time(0).validate().unwrap_err();
        assert_eq!(err.to_string(), "max_game_time_ms must be > 0 (got 0)");
    }
}
