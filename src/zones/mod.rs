//! Card locations.
//!
//! Each player owns a `PlayerPiles`: an ordered draw pile and a winnings
//! pile. Cards only ever move between piles, never appear or vanish.

pub mod piles;

pub use piles::{Drawn, PlayerPiles};
