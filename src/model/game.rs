//! Games: a catalog record dealt onto the table as two cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use crate::catalog::GameRecord;

/// Game identifier, assigned sequentially from 0 at deal time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl GameId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// The two cards of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPair {
    pub title: Card,
    pub desc: Card,
}

impl CardPair {
    /// Face-down title and description cards for `id`.
    #[must_use]
    pub const fn new(id: GameId) -> Self {
        Self {
            title: Card::new(id, CardKind::Title),
            desc: Card::new(id, CardKind::Desc),
        }
    }

    #[must_use]
    pub fn get(&self, kind: CardKind) -> &Card {
        match kind {
            CardKind::Title => &self.title,
            CardKind::Desc => &self.desc,
        }
    }

    pub fn get_mut(&mut self, kind: CardKind) -> &mut Card {
        match kind {
            CardKind::Title => &mut self.title,
            CardKind::Desc => &mut self.desc,
        }
    }

    /// Title card, then description card.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        [&self.title, &self.desc].into_iter()
    }
}

/// A dealt game.
///
/// `won` goes from false to true exactly once and never back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub image: String,
    pub title: String,
    pub desc: String,
    won: bool,
    pub cards: CardPair,
}

impl Game {
    /// Deal a record as game `id`, both cards face down.
    #[must_use]
    pub fn new(id: GameId, record: GameRecord) -> Self {
        Self {
            id,
            image: record.image,
            title: record.title,
            desc: record.desc,
            won: false,
            cards: CardPair::new(id),
        }
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Mark the pair as found. Returns false if it already was.
    pub fn mark_won(&mut self) -> bool {
        let newly = !self.won;
        self.won = true;
        newly
    }

    #[must_use]
    pub fn card(&self, kind: CardKind) -> &Card {
        self.cards.get(kind)
    }

    pub fn card_mut(&mut self, kind: CardKind) -> &mut Card {
        self.cards.get_mut(kind)
    }
}
