//! Seedable random source for the computer opponent.
//!
//! The strategies never touch a global RNG: the session owns a `GameRng`
//! and lends it to whichever strategy is picking the next move. Tests seed it
//! to make every decision reproducible.
//!
//! ```
//! use rps_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.uniform_move(), b.uniform_move());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::Move;

/// Deterministic RNG for move selection.
///
/// The seed is fixed at construction; there is no global fallback stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw one of the three moves uniformly.
    pub fn uniform_move(&mut self) -> Move {
        Move::ALL[self.inner.gen_range(0..Move::ALL.len())]
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` is clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.inner.gen_bool(p)
    }
}
