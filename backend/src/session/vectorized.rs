//! Vectorized session kernel - batch success/failure sampling
//!
//! Functionally identical to the naive kernel, but a roll collapses to a
//! success/failure draw with success probability 1/4, and the session sum
//! is taken in one pass.

use rand::distr::{Bernoulli, Distribution};
use rand::rngs::SmallRng;

use crate::constants::ROLLS_PER_SESSION;

/// Ones rolled in one session, drawn as 231 weighted samples and summed.
pub fn sample_session(dist: &Bernoulli, rng: &mut SmallRng) -> u32 {
    (0..ROLLS_PER_SESSION)
        .map(|_| dist.sample(rng) as u32)
        .sum()
}
