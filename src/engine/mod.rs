//! Match engine: the session state machine and its render collaborator.
//!
//! ## Key Types
//!
//! - `Session`: owned session context (games, layout, renderer)
//! - `Phase`: `Idle`, `OneRevealed`, `Resolved`
//! - `Renderer`: what the engine needs from a UI
//! - `Message`: message box contents

pub mod message;
pub mod render;
pub mod session;

pub use message::{CardTheme, Color, Message};
pub use render::{RecordingRenderer, Renderer, Surface};
pub use session::{ClickOutcome, Phase, Session};
