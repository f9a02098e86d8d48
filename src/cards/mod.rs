//! Cards and the deck builder.
//!
//! - `Card`: rank-only card value (2..=14, joker = 15)
//! - `deck`: builds the 52/54-card deck and shuffles card sequences

pub mod card;
pub mod deck;

pub use card::{Card, InvalidRank};
pub use deck::{build, deck_size, shuffle};
