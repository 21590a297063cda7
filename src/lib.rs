//! # memo-match
//!
//! A memory-matching card game engine. Games from a catalog are dealt as
//! two face-down cards each (image + title, and description); the player
//! turns cards over two at a time looking for pairs.
//!
//! ## Design Principles
//!
//! 1. **Owned session context**: a `Session` holds the games, the display
//!    order, and the renderer. No global state.
//!
//! 2. **Model apart from UI**: cards know nothing about their surfaces.
//!    The engine talks to a `Renderer` trait only.
//!
//! 3. **Derived state**: the phase is computed from the face-up cards of
//!    games not yet won, never cached.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG (with the Fisher–Yates shuffle) and
//!   session configuration
//! - `catalog`: catalog records, loading, and the game pool builder
//! - `model`: games and cards
//! - `engine`: session state machine, messages, render collaborator
//!
//! ```
//! use memo_match::{Catalog, CardKind, CardRef, ClickOutcome, GameId,
//!                  RecordingRenderer, Session, SessionConfig};
//!
//! let config = SessionConfig::default().with_game_count(3).with_seed(1);
//! let mut session = Session::new(config, &Catalog::sample(), RecordingRenderer::new());
//!
//! session.click(CardRef::new(GameId(0), CardKind::Title));
//! let outcome = session.click(CardRef::new(GameId(0), CardKind::Desc));
//! assert_eq!(outcome, ClickOutcome::Matched { game: GameId(0), all_won: false });
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod model;

// Re-export commonly used types
pub use crate::core::{DismissMode, GameRng, Locale, SessionConfig};

pub use crate::catalog::{Catalog, GameRecord, PoolBuilder};

pub use crate::model::{Card, CardKind, CardPair, CardRef, Game, GameId};

pub use crate::engine::{
    CardTheme, ClickOutcome, Color, Message, Phase, RecordingRenderer, Renderer, Session, Surface,
};
