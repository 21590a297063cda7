//! Game session: deals the table and runs the match state machine.
//!
//! ## Phases
//!
//! The phase is derived from the face-up cards of games not yet won:
//! - `Idle`: none shown
//! - `OneRevealed`: one shown
//! - `Resolved`: two shown and not a pair, waiting to be cleared
//!
//! A matching pair never lingers in `Resolved`: its game is marked won on
//! the spot, which drops both cards out of the scan.
//!
//! ## Dismissal
//!
//! `DismissMode::Toggle` clears a mismatch on the next card click and lets a
//! lone revealed card be flipped back. `DismissMode::Background` clears a
//! mismatch only through `dismiss()` and ignores card clicks meanwhile.

use tracing::{debug, info};

use super::message::{CardTheme, Message};
use super::render::Renderer;
use crate::catalog::{Catalog, PoolBuilder};
use crate::core::{DismissMode, GameRng, SessionConfig};
use crate::model::{Card, CardKind, CardRef, Game, GameId};

/// Phase of the match state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    OneRevealed,
    Resolved,
}

/// What an input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// A card was turned face up and no pair is complete yet.
    Revealed,
    /// A lone face-up card was turned back down.
    Hidden,
    /// Two cards of the same game were revealed.
    Matched { game: GameId, all_won: bool },
    /// Two cards of different games were revealed.
    Mismatched,
    /// A mismatched pair was turned face down.
    Dismissed,
}

/// Renderer handles of one game's two cards.
#[derive(Clone, Debug)]
struct SurfacePair<H> {
    title: H,
    desc: H,
}

impl<H> SurfacePair<H> {
    fn get(&self, kind: CardKind) -> &H {
        match kind {
            CardKind::Title => &self.title,
            CardKind::Desc => &self.desc,
        }
    }
}

/// One play session: the dealt games, their display order, and the
/// renderer showing them.
pub struct Session<R: Renderer> {
    config: SessionConfig,
    seed: u64,
    games: Vec<Game>,
    surfaces: Vec<SurfacePair<R::Handle>>,
    layout: Vec<CardRef>,
    message: Message,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Deal a new session from `catalog`.
    ///
    /// Picks games with the pool builder, numbers them from 0, creates two
    /// face-down cards each, shuffles all cards into the display order, and
    /// mounts them.
    pub fn new(config: SessionConfig, catalog: &Catalog, mut renderer: R) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let records = PoolBuilder::new(config.game_count)
            .repeat(config.repeat_games)
            .build(catalog.records(), &mut rng.for_context("pool"));

        let games: Vec<Game> = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Game::new(GameId(i as u32), record))
            .collect();

        let surfaces: Vec<_> = games
            .iter()
            .map(|game| SurfacePair {
                title: renderer.create_card_surface(game, CardKind::Title),
                desc: renderer.create_card_surface(game, CardKind::Desc),
            })
            .collect();

        let mut layout: Vec<CardRef> = games
            .iter()
            .flat_map(|game| game.cards.iter().map(Card::card_ref))
            .collect();
        rng.for_context("layout").shuffle(&mut layout);

        let ordered: Vec<R::Handle> = layout
            .iter()
            .map(|card| surfaces[card.game.index()].get(card.kind).clone())
            .collect();
        renderer.mount_cards(&ordered);

        info!(
            games = games.len(),
            cards = layout.len(),
            mode = ?config.dismiss_mode,
            seed = rng.seed(),
            "dealt session"
        );

        let mut session = Self {
            seed: rng.seed(),
            config,
            games,
            surfaces,
            layout,
            message: Message::Start,
            renderer,
        };
        session.set_message(Message::Start);
        session
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seed the deal was made with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(id.index())
    }

    #[must_use]
    pub fn card(&self, card: CardRef) -> Option<&Card> {
        self.game(card.game).map(|game| game.card(card.kind))
    }

    /// Cards in display order.
    #[must_use]
    pub fn layout(&self) -> &[CardRef] {
        &self.layout
    }

    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Face-up cards of games not yet won, in game order.
    #[must_use]
    pub fn shown_cards(&self) -> Vec<&Card> {
        self.games
            .iter()
            .filter(|game| !game.is_won())
            .flat_map(|game| game.cards.iter())
            .filter(|card| card.shown)
            .collect()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.shown_cards().len() {
            0 => Phase::Idle,
            1 => Phase::OneRevealed,
            n => {
                debug_assert_eq!(n, 2, "more than two cards face up");
                Phase::Resolved
            }
        }
    }

    #[must_use]
    pub fn won_count(&self) -> usize {
        self.games.iter().filter(|game| game.is_won()).count()
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.games.iter().all(Game::is_won)
    }

    /// Configuration for the "play again" link.
    #[must_use]
    pub fn restart_config(&self) -> SessionConfig {
        self.config.clone()
    }

    /// Configuration for the "harder" link.
    #[must_use]
    pub fn harder_config(&self) -> SessionConfig {
        let mut config = self.config.clone();
        config.game_count = self.config.next_difficulty();
        config
    }

    /// Query string behind the "play again" link.
    #[must_use]
    pub fn restart_link(&self) -> String {
        self.config.to_query_with_games(self.config.game_count)
    }

    /// Query string behind the "harder" link.
    #[must_use]
    pub fn harder_link(&self) -> String {
        self.config.to_query_with_games(self.config.next_difficulty())
    }

    // === Input ===

    /// Handle a click on the card at display position `position`.
    pub fn click_at(&mut self, position: usize) -> ClickOutcome {
        match self.layout.get(position).copied() {
            Some(card) => self.click(card),
            None => ClickOutcome::Ignored,
        }
    }

    /// Handle a click on `card`.
    pub fn click(&mut self, card: CardRef) -> ClickOutcome {
        let Some(game) = self.games.get(card.game.index()) else {
            return ClickOutcome::Ignored;
        };
        debug!(game = %card.game, kind = %card.kind, title = %game.title, "card clicked");
        if game.is_won() {
            return ClickOutcome::Ignored;
        }
        let was_shown = game.card(card.kind).shown;
        let mode = self.config.dismiss_mode;

        if self.phase() == Phase::Resolved {
            return match mode {
                DismissMode::Toggle => self.clear_mismatch(),
                DismissMode::Background => ClickOutcome::Ignored,
            };
        }

        if was_shown && mode == DismissMode::Background {
            return ClickOutcome::Ignored;
        }
        self.set_shown(card, !was_shown);

        let shown: Vec<Card> = self.shown_cards().into_iter().cloned().collect();
        match shown.as_slice() {
            [] => {
                self.set_message(Message::TapCard);
                ClickOutcome::Hidden
            }
            [_] => {
                self.set_message(Message::TapAnother);
                ClickOutcome::Revealed
            }
            [a, b] if a.matches(b) => self.win_pair(a.id),
            _ => {
                info!(game = %card.game, "cards don't match");
                self.set_message(Message::Mismatch);
                ClickOutcome::Mismatched
            }
        }
    }

    /// Handle a click on the background.
    ///
    /// Clears a mismatch in `DismissMode::Background`; otherwise a no-op.
    pub fn dismiss(&mut self) -> ClickOutcome {
        if self.config.dismiss_mode == DismissMode::Background && self.phase() == Phase::Resolved {
            self.clear_mismatch()
        } else {
            ClickOutcome::Ignored
        }
    }

    // === Transitions ===

    fn clear_mismatch(&mut self) -> ClickOutcome {
        let shown: Vec<CardRef> = self.shown_cards().iter().map(|c| c.card_ref()).collect();
        for card in shown {
            self.set_shown(card, false);
        }
        self.set_message(Message::TapCard);
        ClickOutcome::Dismissed
    }

    fn win_pair(&mut self, id: GameId) -> ClickOutcome {
        let game = &mut self.games[id.index()];
        game.mark_won();
        info!(game = %id, title = %game.title, "pair found");

        let surfaces = &self.surfaces[id.index()];
        for kind in CardKind::ALL {
            self.renderer
                .set_card_visual_state(surfaces.get(kind), true, CardTheme::Won);
        }

        let all_won = self.is_complete();
        if all_won {
            let next_game_count = self.config.next_difficulty();
            info!(games = self.games.len(), next_game_count, "all pairs found");
            self.set_message(Message::Victory { next_game_count });
        } else {
            self.set_message(Message::FoundPair);
        }
        ClickOutcome::Matched { game: id, all_won }
    }

    fn set_shown(&mut self, card: CardRef, shown: bool) {
        self.games[card.game.index()].card_mut(card.kind).shown = shown;
        let handle = self.surfaces[card.game.index()].get(card.kind);
        self.renderer
            .set_card_visual_state(handle, shown, CardTheme::Plain);
    }

    fn set_message(&mut self, message: Message) {
        let text = message.text(self.config.locale);
        self.renderer.set_message(&text, message.color());
        self.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameRecord;
    use crate::engine::RecordingRenderer;

    fn catalog(n: usize) -> Catalog {
        (0..n)
            .map(|i| GameRecord::new(format!("{i}.jpg"), format!("Game {i}"), format!("About {i}")))
            .collect::<Vec<_>>()
            .into()
    }

    fn session(mode: DismissMode, games: usize) -> Session<RecordingRenderer> {
        let config = SessionConfig::new(mode).with_game_count(games).with_seed(17);
        Session::new(config, &catalog(10), RecordingRenderer::new())
    }

    fn title(id: u32) -> CardRef {
        CardRef::new(GameId(id), CardKind::Title)
    }

    fn desc(id: u32) -> CardRef {
        CardRef::new(GameId(id), CardKind::Desc)
    }

    #[test]
    fn test_deal() {
        let s = session(DismissMode::Toggle, 4);
        assert_eq!(s.games().len(), 4);
        assert_eq!(s.layout().len(), 8);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.message(), &Message::Start);
        assert_eq!(s.renderer().mounted().count(), 8);
        for (i, game) in s.games().iter().enumerate() {
            assert_eq!(game.id, GameId(i as u32));
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = session(DismissMode::Toggle, 4);
        let b = session(DismissMode::Toggle, 4);
        assert_eq!(a.layout(), b.layout());
        assert_eq!(a.games(), b.games());
    }

    #[test]
    fn test_reveal_then_toggle_back() {
        let mut s = session(DismissMode::Toggle, 4);

        assert_eq!(s.click(title(0)), ClickOutcome::Revealed);
        assert_eq!(s.phase(), Phase::OneRevealed);
        assert_eq!(s.message(), &Message::TapAnother);

        assert_eq!(s.click(title(0)), ClickOutcome::Hidden);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.message(), &Message::TapCard);
    }

    #[test]
    fn test_background_mode_has_no_toggle_back() {
        let mut s = session(DismissMode::Background, 4);

        s.click(title(0));
        assert_eq!(s.click(title(0)), ClickOutcome::Ignored);
        assert_eq!(s.phase(), Phase::OneRevealed);
    }

    #[test]
    fn test_match() {
        let mut s = session(DismissMode::Toggle, 4);

        s.click(desc(2));
        let outcome = s.click(title(2));

        assert_eq!(outcome, ClickOutcome::Matched { game: GameId(2), all_won: false });
        assert!(s.game(GameId(2)).unwrap().is_won());
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.message(), &Message::FoundPair);
        assert!(s.card(title(2)).unwrap().shown);
        assert!(s.card(desc(2)).unwrap().shown);
    }

    #[test]
    fn test_won_game_is_inert() {
        let mut s = session(DismissMode::Toggle, 4);
        s.click(title(1));
        s.click(desc(1));

        assert_eq!(s.click(title(1)), ClickOutcome::Ignored);
        assert!(s.card(title(1)).unwrap().shown);
        assert_eq!(s.message(), &Message::FoundPair);
    }

    #[test]
    fn test_mismatch_then_card_click_clears() {
        let mut s = session(DismissMode::Toggle, 4);

        s.click(title(0));
        assert_eq!(s.click(desc(3)), ClickOutcome::Mismatched);
        assert_eq!(s.phase(), Phase::Resolved);
        assert_eq!(s.message(), &Message::Mismatch);

        // The clearing click reveals nothing, even on a third card.
        assert_eq!(s.click(title(2)), ClickOutcome::Dismissed);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.card(title(2)).unwrap().shown);
        assert_eq!(s.message(), &Message::TapCard);
    }

    #[test]
    fn test_mismatch_background_dismiss() {
        let mut s = session(DismissMode::Background, 4);

        s.click(title(0));
        s.click(title(1));
        assert_eq!(s.phase(), Phase::Resolved);

        assert_eq!(s.click(desc(2)), ClickOutcome::Ignored);
        assert_eq!(s.click(title(0)), ClickOutcome::Ignored);
        assert_eq!(s.phase(), Phase::Resolved);

        assert_eq!(s.dismiss(), ClickOutcome::Dismissed);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.dismiss(), ClickOutcome::Ignored);
    }

    #[test]
    fn test_toggle_mode_ignores_background() {
        let mut s = session(DismissMode::Toggle, 4);
        s.click(title(0));
        s.click(title(1));
        assert_eq!(s.dismiss(), ClickOutcome::Ignored);
        assert_eq!(s.phase(), Phase::Resolved);
    }

    #[test]
    fn test_victory() {
        let mut s = session(DismissMode::Toggle, 3);
        for id in 0..3 {
            s.click(title(id));
            let outcome = s.click(desc(id));
            assert_eq!(outcome, ClickOutcome::Matched { game: GameId(id), all_won: id == 2 });
        }

        assert!(s.is_complete());
        assert_eq!(s.message(), &Message::Victory { next_game_count: 5 });
        assert_eq!(s.harder_config().game_count, 5);
        assert_eq!(s.restart_config().game_count, 3);
        assert_eq!(s.restart_link(), "?games=3");
        assert_eq!(s.harder_link(), "?games=5");
        assert_eq!(SessionConfig::from_query(&s.harder_link()).game_count, 5);
    }

    #[test]
    fn test_unknown_card_and_position() {
        let mut s = session(DismissMode::Toggle, 2);
        assert_eq!(s.click(title(40)), ClickOutcome::Ignored);
        assert_eq!(s.click_at(99), ClickOutcome::Ignored);
        assert_eq!(s.click_at(0), ClickOutcome::Revealed);
    }

    #[test]
    fn test_renderer_follows_model() {
        let mut s = session(DismissMode::Toggle, 2);
        s.click(title(0));
        s.click(desc(0));

        let won: Vec<_> = s
            .renderer()
            .mounted()
            .filter(|surface| surface.card.game == GameId(0))
            .collect();
        assert_eq!(won.len(), 2);
        assert!(won.iter().all(|surface| surface.shown && surface.theme == CardTheme::Won));
        assert_eq!(s.renderer().message(), Some(Message::FoundPair.text(s.config().locale).as_str()));
    }
}
