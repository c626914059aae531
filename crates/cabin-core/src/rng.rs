//! Deterministic run-wide random source.
//!
//! # Determinism strategy
//!
//! A run draws every random number (seat sampling, initial infections, trip
//! starts, bathroom choice, infection draws) from one `SmallRng` seeded from
//! `SimConfig::seed`.  The tick loop is sequential and visits agents in
//! ascending `AgentId` order, so the draw sequence, and therefore every
//! trajectory and infection, is a pure function of the seed and the
//! concentration fields the solver returns.
//!
//! Nothing in the workspace touches `rand::thread_rng`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the single-threaded tick loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// One uniform draw compared against `p`: `true` iff `draw < p`.
    ///
    /// Always consumes exactly one draw, even for `p <= 0` or `p >= 1`, so
    /// the draw sequence does not depend on the probability values.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// `amount` distinct indices from `0..len`, in random order.
    ///
    /// # Panics
    /// Panics if `amount > len`; callers validate population size first.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }
}
