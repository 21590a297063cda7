//! Card/game data model.
//!
//! A `Game` owns exactly two `Card`s (title and description) in a fixed
//! `CardPair`. Both cards carry the game's id, which is what matching
//! compares. The model holds no rendering state.

pub mod card;
pub mod game;

pub use card::{Card, CardKind, CardRef};
pub use game::{CardPair, Game, GameId};
