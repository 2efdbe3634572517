//! Seeded random source for move selection.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seedable random source for move selection.
///
/// Remembers its seed so a game can be replayed exactly.
pub struct MoveRng {
    rng: StdRng,
    seed: u64,
}

impl MoveRng {
    /// Creates a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the thread-local generator.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    /// The seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for MoveRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveRng").field("seed", &self.seed).finish()
    }
}

impl RngCore for MoveRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
