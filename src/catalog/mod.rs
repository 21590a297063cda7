//! Static game catalog and the pool builder that deals from it.
//!
//! ## Key Types
//!
//! - `GameRecord`: image, title, and description of one game
//! - `Catalog`: ordered record list, loaded from JSON or the extractor's
//!   `rawGameData=[...]` script output
//! - `PoolBuilder`: picks (and if asked, synthesizes) a session's games

pub mod pool;
pub mod record;

pub use pool::PoolBuilder;
pub use record::GameRecord;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Variable name the catalog extractor assigns the record array to.
const SCRIPT_PREFIX: &str = "rawGameData=";

/// Ordered collection of game records supplied at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    /// Parse a catalog from either a bare JSON array or the script form
    /// `rawGameData=[...]` (optionally followed by `;`).
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let json = match trimmed.strip_prefix(SCRIPT_PREFIX) {
            Some(rest) => rest.trim().trim_end_matches(';'),
            None => trimmed,
        };
        let records: Vec<GameRecord> =
            serde_json::from_str(json).context("catalog is not a JSON array of game records")?;
        Ok(Self { records })
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse catalog {}", path.display()))
    }

    /// Small built-in catalog of classic board games.
    #[must_use]
    pub fn sample() -> Self {
        let records = [
            ("images/chess.jpg", "Chess", "Checkmate the opposing king with six kinds of pieces."),
            ("images/go.jpg", "Go", "Surround more territory than your opponent with stones."),
            ("images/senet.jpg", "Senet", "Race your pieces along thirty squares, as in ancient Egypt."),
            ("images/mancala.jpg", "Mancala", "Sow seeds around pits and capture your opponent's."),
            ("images/backgammon.jpg", "Backgammon", "Bear off all fifteen checkers before your rival."),
            ("images/checkers.jpg", "Checkers", "Jump diagonally to capture every enemy piece."),
            ("images/hnefatafl.jpg", "Hnefatafl", "Escort the king to a corner while attackers close in."),
            ("images/mahjong.jpg", "Mahjong", "Build sets of tiles into a complete winning hand."),
        ];
        Self {
            records: records
                .into_iter()
                .map(|(image, title, desc)| GameRecord::new(image, title, desc))
                .collect(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<GameRecord>> for Catalog {
    fn from(records: Vec<GameRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"[{"image":"a.jpg","title":"A","desc":"first"},
                          {"image":"b.jpg","title":"B","desc":"second"}]"#;

    #[test]
    fn test_parse_json_array() {
        let catalog = Catalog::parse(JSON).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[1].title, "B");
    }

    #[test]
    fn test_parse_script_form() {
        let script = format!("rawGameData={JSON};\n");
        let catalog = Catalog::parse(&script).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].desc, "first");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Catalog::parse("rawGameData={}").is_err());
        assert!(Catalog::parse("not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read catalog"));
    }

    #[test]
    fn test_sample() {
        let catalog = Catalog::sample();
        assert!(!catalog.is_empty());
        assert!(catalog.records().iter().all(|r| !r.title.is_empty()));
    }
}
