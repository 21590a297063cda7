//! Deterministic random number generation for session setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals, across builds
//!   and toolchains (context seeds use a fixed mix, not `std` hashing)
//! - **Context streams**: Independent sequences for different purposes
//!   (picking games vs. laying out cards)
//!
//! ```
//! use memo_match::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backing every shuffle in a session.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// so the game pool and the card layout don't disturb each other.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Uniform index in `0..upper`. `upper` must be non-zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Shuffle a slice in place.
    ///
    /// Backward Fisher–Yates: for `cur` from `len` down to 1, swap the
    /// element at `cur - 1` with one picked uniformly from `0..cur`.
    /// Empty and single-element slices are left untouched.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let mut cur = slice.len();
        while cur > 0 {
            let pick = self.gen_index(cur);
            cur -= 1;
            slice.swap(cur, pick);
        }
    }
}

/// FNV-1a over the context bytes, keyed by `seed`, then the SplitMix64
/// finalizer. Stable across Rust releases.
fn context_seed(seed: u64, context: &str) -> u64 {
    let mut h = seed ^ 0xcbf2_9ce4_8422_2325;
    for &byte in context.as_bytes() {
        h ^= u64::from(byte);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }

    let mut z = h.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
