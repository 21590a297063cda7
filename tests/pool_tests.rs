//! Game pool tests.
//!
//! These tests cover how a session's games are picked from the catalog:
//! - Large catalogs are sampled without repeats
//! - Short catalogs are filled with versioned copies when asked
//! - Short catalogs without repeat deal fewer games

use memo_match::{Catalog, GameRecord, GameRng, PoolBuilder, RecordingRenderer, Session, SessionConfig};

fn catalog(n: usize) -> Catalog {
    (0..n)
        .map(|i| GameRecord::new(format!("img/{i}.jpg"), format!("Game {i}"), format!("Desc {i}")))
        .collect::<Vec<_>>()
        .into()
}

/// Two-entry catalog, five games: two originals plus three versioned copies.
#[test]
fn test_two_entries_five_games_with_repeat() {
    let records = catalog(2);

    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let picked = PoolBuilder::new(5).repeat(true).build(records.records(), &mut rng);
        assert_eq!(picked.len(), 5);

        let originals: Vec<_> = picked.iter().filter(|r| !r.title.contains("versión")).collect();
        let v2 = picked.iter().filter(|r| r.title.ends_with("(versión 2)")).count();
        let v3 = picked.iter().filter(|r| r.title.ends_with("(versión 3)")).count();

        assert_eq!(originals.len(), 2);
        assert_eq!(v2, 2);
        assert_eq!(v3, 1);

        // Suffix lands on both title and description.
        for record in &picked {
            assert_eq!(
                record.title.contains("versión"),
                record.desc.contains("versión"),
            );
        }
    }
}

/// Synthetic copies keep the image of the record they came from.
#[test]
fn test_synthetic_keeps_image() {
    let records = catalog(3);
    let mut rng = GameRng::new(8);
    let picked = PoolBuilder::new(9).repeat(true).build(records.records(), &mut rng);

    for record in &picked {
        let base = records
            .records()
            .iter()
            .find(|r| record.title.starts_with(&r.title))
            .expect("synthetic record should derive from a catalog entry");
        assert_eq!(base.image, record.image);
    }
}

/// Ten entries, four games, no repeat: a session of four games and eight cards.
#[test]
fn test_session_from_large_catalog() {
    let config = SessionConfig::default().with_game_count(4).with_seed(3);
    let session = Session::new(config, &catalog(10), RecordingRenderer::new());

    assert_eq!(session.games().len(), 4);
    assert_eq!(session.layout().len(), 8);
    assert_eq!(session.renderer().message(), Some("Tap a card to start."));
}

/// Short catalog without repeat deals what exists.
#[test]
fn test_session_from_short_catalog() {
    let config = SessionConfig::default().with_game_count(6).with_seed(3);
    let session = Session::new(config, &catalog(2), RecordingRenderer::new());

    assert_eq!(session.games().len(), 2);
    assert_eq!(session.layout().len(), 4);
}

/// Empty catalog gives an empty, already-complete table.
#[test]
fn test_session_from_empty_catalog() {
    let config = SessionConfig::default().with_repeat(true).with_seed(3);
    let session = Session::new(config, &Catalog::default(), RecordingRenderer::new());

    assert!(session.games().is_empty());
    assert!(session.layout().is_empty());
}

/// Different seeds give different deals.
#[test]
fn test_seed_changes_deal() {
    let deal = |seed| {
        let config = SessionConfig::default().with_game_count(5).with_seed(seed);
        let session = Session::new(config, &catalog(10), RecordingRenderer::new());
        session
            .games()
            .iter()
            .map(|g| g.title.clone())
            .collect::<Vec<_>>()
    };
    assert_ne!(deal(1), deal(2));
    assert_eq!(deal(1), deal(1));
}
