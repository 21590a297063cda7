//! Cards: the two faces of a game.

use serde::{Deserialize, Serialize};

use super::game::GameId;

/// Which face of a game a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Image and title.
    Title,
    /// Description text.
    Desc,
}

impl CardKind {
    /// Both kinds, in pair order.
    pub const ALL: [CardKind; 2] = [CardKind::Title, CardKind::Desc];
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Title => f.write_str("title"),
            CardKind::Desc => f.write_str("desc"),
        }
    }
}

/// Address of one card: its game plus its face.
///
/// This is what a click reports back to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardRef {
    pub game: GameId,
    pub kind: CardKind,
}

impl CardRef {
    #[must_use]
    pub const fn new(game: GameId, kind: CardKind) -> Self {
        Self { game, kind }
    }
}

/// A card on the table.
///
/// `id` equals the owning game's id and is the matching key, not a unique
/// card identity: exactly two cards share each id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: GameId,
    pub kind: CardKind,
    pub shown: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: GameId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            shown: false,
        }
    }

    #[must_use]
    pub const fn card_ref(&self) -> CardRef {
        CardRef::new(self.id, self.kind)
    }

    /// Two cards match when they carry the same id.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.id == other.id
    }
}
