//! Naive session kernel - one die roll at a time
//!
//! Direct restatement of the experiment: roll a 4-sided die 231 times,
//! count how often each face comes up, report the ones.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::constants::{DIE_FACES, ROLLS_PER_SESSION};

/// Roll one full session and tally every face.
///
/// Index 0 holds the count of face 1. The tally always sums to
/// [`ROLLS_PER_SESSION`].
pub fn roll_tally(rng: &mut SmallRng) -> [u32; DIE_FACES as usize] {
    let mut tally = [0u32; DIE_FACES as usize];
    for _ in 0..ROLLS_PER_SESSION {
        let face: usize = rng.random_range(1..=DIE_FACES as usize);
        tally[face - 1] += 1;
    }
    tally
}

/// Ones rolled in one naive session.
#[inline]
pub fn roll_session(rng: &mut SmallRng) -> u32 {
    roll_tally(rng)[0]
}
