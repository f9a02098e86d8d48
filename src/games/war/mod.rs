//! The card game War.
//!
//! Two players split a shuffled deck and repeatedly turn over their top
//! card; the higher rank takes both. Equal ranks start a war: each player
//! puts down three cards face-down and one face-up, and the face-up cards
//! decide who takes everything on the table. Ties nest into deep wars.
//!
//! Besides the cards, the engine tracks simulated wall-clock time: every
//! hand and every reshuffle of a player's winnings costs a configurable
//! number of milliseconds, and a game is cut off once it runs past its
//! time or trick budget.

mod game;
mod stats;

pub use game::{play_game, WarGame, WarPile, WAR_DRAW};
pub use stats::{GameStats, Termination};
