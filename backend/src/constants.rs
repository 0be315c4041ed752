//! Compile-time simulation parameters
//!
//! The binaries take no flags; every knob of the reference behavior lives
//! here as a constant.

/// Die rolls per session. 231 = 64 * 4 - 25, which is what the bitwise
/// kernel covers with four masked popcounts.
pub const ROLLS_PER_SESSION: usize = 231;

/// Number of faces on the simulated die.
pub const DIE_FACES: u32 = 4;

/// Sessions run by the naive and vectorized binaries.
pub const DEFAULT_SESSIONS: u64 = 1_000_000;

/// Trials run by the bit-parallel binary.
pub const PARALLEL_TRIALS: u64 = 1_000_000_000;

/// Base RNG seed; worker `i` seeds its generator with `BASE_SEED + i`.
pub const BASE_SEED: u64 = 42;

/// The naive binary stops early once a session reaches this many ones.
pub const TARGET_ONES: u32 = 177;
