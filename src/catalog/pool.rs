//! Game pool builder: picks the session's games from the catalog.
//!
//! - Catalog at least as large as the target: shuffle, take the first N.
//! - Short catalog with repeat enabled: keep every original, then cycle
//!   through a shuffled copy appending `(versión 2)`, `(versión 3)`, ...
//!   (one version per full pass) until N entries exist; shuffle, take N.
//! - Short catalog without repeat: fewer than N games, not an error.

use tracing::debug;

use super::record::GameRecord;
use crate::core::GameRng;

/// Version number given to the first synthetic pass.
pub const FIRST_SYNTHETIC_VERSION: u32 = 2;

/// Builds the ordered set of records a session deals.
#[derive(Clone, Debug)]
pub struct PoolBuilder {
    target: usize,
    repeat: bool,
}

impl PoolBuilder {
    /// Create a builder for `target` games.
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            repeat: false,
        }
    }

    /// Enable or disable synthetic repeats.
    #[must_use]
    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Select the records. Order is random and carries no meaning.
    pub fn build(&self, catalog: &[GameRecord], rng: &mut GameRng) -> Vec<GameRecord> {
        let mut selected = catalog.to_vec();

        if self.repeat && !catalog.is_empty() && selected.len() < self.target {
            let mut pool = catalog.to_vec();
            rng.shuffle(&mut pool);

            let mut version = FIRST_SYNTHETIC_VERSION;
            let mut cycle = pool.iter().cycle().enumerate();
            while selected.len() < self.target {
                let Some((drawn, record)) = cycle.next() else {
                    break;
                };
                if drawn > 0 && drawn % pool.len() == 0 {
                    version += 1;
                }
                selected.push(record.versioned(version));
            }
            debug!(
                originals = catalog.len(),
                synthetic = selected.len() - catalog.len(),
                last_version = version,
                "filled pool with repeats"
            );
        }

        rng.shuffle(&mut selected);
        selected.truncate(self.target);
        selected
    }
}
