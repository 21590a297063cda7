//! Render collaborator.
//!
//! The session drives a `Renderer` and never touches concrete UI nodes.
//! A surface is created per card and tagged with its `CardRef`; the front
//! end routes clicks on it back to `Session::click`.

use super::message::{CardTheme, Color};
use crate::model::{CardKind, CardRef, Game};

/// Capability set the match engine needs from a UI.
pub trait Renderer {
    /// Opaque handle to a card surface.
    type Handle: Clone;

    /// Create the (face-down) surface for one card of `game`.
    fn create_card_surface(&mut self, game: &Game, kind: CardKind) -> Self::Handle;

    /// Reveal or hide a card, and set its theme.
    fn set_card_visual_state(&mut self, handle: &Self::Handle, shown: bool, theme: CardTheme);

    /// Replace the message box contents.
    fn set_message(&mut self, text: &str, color: Color);

    /// Place the surfaces on the table in display order.
    fn mount_cards(&mut self, ordered: &[Self::Handle]);
}

/// State of one surface in a `RecordingRenderer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    pub card: CardRef,
    /// What the face shows when revealed.
    pub face: String,
    pub shown: bool,
    pub theme: CardTheme,
}

/// In-memory renderer: keeps every surface and message it was given.
///
/// Backs headless play (the terminal front end) and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    surfaces: Vec<Surface>,
    mounted: Vec<usize>,
    message: Option<(String, Color)>,
    history: Vec<String>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn surface(&self, handle: usize) -> Option<&Surface> {
        self.surfaces.get(handle)
    }

    /// Surfaces in mounted (display) order.
    pub fn mounted(&self) -> impl Iterator<Item = &Surface> {
        self.mounted.iter().map(move |&h| &self.surfaces[h])
    }

    /// Current message text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(text, _)| text.as_str())
    }

    /// Every message set so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Renderer for RecordingRenderer {
    type Handle = usize;

    fn create_card_surface(&mut self, game: &Game, kind: CardKind) -> usize {
        let face = match kind {
            CardKind::Title => format!("{} [{}]", game.title, game.image),
            CardKind::Desc => game.desc.clone(),
        };
        self.surfaces.push(Surface {
            card: CardRef::new(game.id, kind),
            face,
            shown: false,
            theme: CardTheme::Plain,
        });
        self.surfaces.len() - 1
    }

    fn set_card_visual_state(&mut self, handle: &usize, shown: bool, theme: CardTheme) {
        if let Some(surface) = self.surfaces.get_mut(*handle) {
            surface.shown = shown;
            surface.theme = theme;
        }
    }

    fn set_message(&mut self, text: &str, color: Color) {
        self.history.push(text.to_string());
        self.message = Some((text.to_string(), color));
    }

    fn mount_cards(&mut self, ordered: &[usize]) {
        self.mounted = ordered.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameRecord;
    use crate::model::GameId;

    #[test]
    fn test_recording_renderer() {
        let game = Game::new(GameId(0), GameRecord::new("go.jpg", "Go", "Stones"));
        let mut renderer = RecordingRenderer::new();

        let title = renderer.create_card_surface(&game, CardKind::Title);
        let desc = renderer.create_card_surface(&game, CardKind::Desc);
        renderer.mount_cards(&[desc, title]);

        let faces: Vec<_> = renderer.mounted().map(|s| s.face.as_str()).collect();
        assert_eq!(faces, vec!["Stones", "Go [go.jpg]"]);

        renderer.set_card_visual_state(&title, true, CardTheme::Won);
        let surface = renderer.surface(title).unwrap();
        assert!(surface.shown);
        assert_eq!(surface.theme, CardTheme::Won);

        renderer.set_message("hello", Color::BLACK);
        assert_eq!(renderer.message(), Some("hello"));
        assert_eq!(renderer.history().len(), 1);
    }
}
