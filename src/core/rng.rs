//! Seeded randomness for playouts.
//!
//! Random play must be reproducible: a playout is fully determined by the
//! board and the seed it was given. Batches of playouts draw from forks, so
//! adding one more playout to a batch leaves the earlier ones unchanged.
//!
//! ```
//! use pegboard::core::GameRng;
//!
//! let mut batch = GameRng::new(42);
//! let mut first = batch.fork();
//!
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(first.index(15), again.index(15));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a child stream. The n-th fork of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// A uniform index below `len`, or `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.stream.gen_range(0..len))
    }

    /// A uniform element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn checkpoint(&self) -> RngCheckpoint {
        RngCheckpoint {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a stream from a checkpoint.
    #[must_use]
    pub fn restore(checkpoint: &RngCheckpoint) -> Self {
        let mut rng = Self::new(checkpoint.seed);
        rng.stream.set_word_pos(checkpoint.word_pos);
        rng.forks = checkpoint.forks;
        rng
    }
}

/// Serializable position of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    pub seed: u64,
    /// ChaCha word counter.
    pub word_pos: u128,
    pub forks: u64,
}
