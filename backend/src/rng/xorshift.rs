//! xorshift64 random number generator
//!
//! This is a fast, non-cryptographic PRNG with a single 64-bit state word,
//! suitable for simulation purposes.
//!
//! # Algorithm
//!
//! Plain xorshift64 (Marsaglia): three XOR-shift steps per draw,
//! `x ^= x << 13; x ^= x >> 7; x ^= x << 17`, each applied to the full
//! 64-bit word. The generator is used at millions of draws per worker,
//! where it passes the statistical tests this simulation needs.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact simulation)
//! - Testing (verify behavior)
//! - Decorrelated workers (seed = base + worker index)

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64
///
/// # Example
/// ```
/// use dice_simulator_core_rs::Xorshift64;
///
/// let mut gen = Xorshift64::new(12345);
/// let value = gen.next();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    /// Internal state (64-bit)
    state: u64,
}

impl Xorshift64 {
    /// Create a new generator with given seed
    ///
    /// Zero is a fixed point of the recurrence and would produce an
    /// all-zero stream, so a zero seed is coerced to 1.
    ///
    /// # Example
    /// ```
    /// use dice_simulator_core_rs::Xorshift64;
    ///
    /// let gen = Xorshift64::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns the new state.
    ///
    /// # Example
    /// ```
    /// use dice_simulator_core_rs::Xorshift64;
    ///
    /// let mut gen = Xorshift64::new(12345);
    /// let value = gen.next();
    /// ```
    #[inline(always)]
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Get current generator state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use dice_simulator_core_rs::Xorshift64;
    ///
    /// let gen = Xorshift64::new(12345);
    /// let state = gen.get_state();
    ///
    /// // Later, can recreate the generator from this state
    /// let gen2 = Xorshift64::new(state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
