//! Core types: players, RNG, configuration.
//!
//! These are shared by the deck, the piles, the engine and the batch driver.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, SimulationConfig, DEFAULT_MAX_TRICKS};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
