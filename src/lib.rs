//! # war-sim
//!
//! Monte Carlo simulation of the card game War.
//!
//! Each game deals a shuffled deck (optionally with two jokers) between
//! two players and plays tricks until one player is out of cards or the
//! game hits its trick or simulated-time ceiling. Besides card play, the
//! engine charges simulated time for every hand and every reshuffle, so a
//! batch answers questions like "how long does a game of War take?".
//!
//! ## Design
//!
//! 1. **Owned state**: a `WarGame` exclusively owns both players' piles,
//!    its RNG stream and its statistics. Nothing is shared between games.
//!
//! 2. **Deterministic**: one batch seed forks an independent stream per
//!    game, so batches and single games replay bit-identically.
//!
//! 3. **Contained faults**: each game's outcome is a `Result`. A panic in
//!    one game is recorded and the batch continues.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration
//! - `cards`: card values, deck builder and shuffle
//! - `zones`: per-player draw and winnings piles
//! - `games`: the War engine and per-game statistics
//! - `simulation`: batch driver, summary statistics, CSV output

pub mod cards;
pub mod core;
pub mod games;
pub mod simulation;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, SimulationConfig};

pub use crate::cards::Card;

pub use crate::zones::{Drawn, PlayerPiles};

pub use crate::games::war::{play_game, GameStats, Termination, WarGame};

pub use crate::simulation::{BatchSummary, FieldSummary, GameFault, GameRecord, Simulation};
