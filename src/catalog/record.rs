//! Catalog records: the static content behind each game.

use serde::{Deserialize, Serialize};

/// One catalog entry: an image reference, a title, and a description.
///
/// The title card shows `image` and `title`; the description card shows
/// `desc`. Players match the two.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRecord {
    /// Image reference (path or URL), opaque to the engine.
    pub image: String,
    pub title: String,
    pub desc: String,
}

impl GameRecord {
    /// Create a record.
    pub fn new(image: impl Into<String>, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            desc: desc.into(),
        }
    }

    /// Copy of this record with a version suffix on title and description.
    ///
    /// Used to fill a short catalog: `"Chess"` becomes `"Chess (versión 2)"`.
    #[must_use]
    pub fn versioned(&self, version: u32) -> Self {
        Self {
            image: self.image.clone(),
            title: format!("{} (versión {version})", self.title),
            desc: format!("{} (versión {version})", self.desc),
        }
    }
}
