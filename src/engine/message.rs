//! Player-facing messages and colors.

use serde::{Deserialize, Serialize};

use crate::core::Locale;

/// RGB color handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Background of cards whose pair has been found (`#D0F0D0`).
    pub const WON: Color = Color::rgb(0xD0, 0xF0, 0xD0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Visual theme of a card surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardTheme {
    #[default]
    Plain,
    Won,
}

impl CardTheme {
    /// Background override, `None` for the renderer's default.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            CardTheme::Plain => None,
            CardTheme::Won => Some(Color::WON),
        }
    }
}

/// What the message box says.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Fresh table.
    Start,
    /// Nothing revealed.
    TapCard,
    /// One card revealed.
    TapAnother,
    /// A pair was found and games remain.
    FoundPair,
    /// Two revealed cards belong to different games.
    Mismatch,
    /// Every pair found. Carries the game count of the "harder" link.
    Victory { next_game_count: usize },
}

impl Message {
    /// Color the message is drawn in.
    #[must_use]
    pub fn color(&self) -> Color {
        Color::BLACK
    }

    /// Message text. Lines are separated by `\n`.
    #[must_use]
    pub fn text(&self, locale: Locale) -> String {
        match (self, locale) {
            (Message::Start, Locale::English) => "Tap a card to start.".into(),
            (Message::Start, Locale::Spanish) => "Toca una tarjeta para empezar.".into(),
            (Message::TapCard, Locale::English) => "Tap a card.".into(),
            (Message::TapCard, Locale::Spanish) => "Toca una tarjeta.".into(),
            (Message::TapAnother, Locale::English) => "Tap another card.".into(),
            (Message::TapAnother, Locale::Spanish) => "Toca otra tarjeta.".into(),
            (Message::FoundPair, Locale::English) => {
                "Congratulations, you found a pair!\nTap another card to keep playing.".into()
            }
            (Message::FoundPair, Locale::Spanish) => {
                "Felicitaciones, encontraste un par!\nToca otra tarjeta para seguir jugando.".into()
            }
            (Message::Mismatch, Locale::English) => {
                "Those cards don't match :(\nTap any card to try again.".into()
            }
            (Message::Mismatch, Locale::Spanish) => {
                "Esas tarjetas no calzan :(\nToca cualquier tarjeta para volver a intentarlo.".into()
            }
            (Message::Victory { next_game_count }, Locale::English) => format!(
                "Congratulations, you found all the pairs!\n[Play again] [Harder: {next_game_count} games]"
            ),
            (Message::Victory { next_game_count }, Locale::Spanish) => format!(
                "Felicitaciones, encontraste todos los pares!\n[Jugar de nuevo] [Más difícil: {next_game_count} juegos]"
            ),
        }
    }
}
