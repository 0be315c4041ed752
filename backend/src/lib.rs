//! Dice Max-Ones Simulator - Rust Engine
//!
//! Estimates, via repeated random trials, the maximum observed count of
//! "ones" across many simulated sessions of 4-sided die rolls.
//!
//! # Architecture
//!
//! - **constants**: Compile-time simulation parameters (rolls, sessions, seeds)
//! - **rng**: Deterministic random number generation (xorshift64)
//! - **bits**: Population count primitive
//! - **session**: Per-session statistic kernels (naive, vectorized, bitwise)
//! - **orchestrator**: Sequential runners and the parallel engine
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded generators, one per worker)
//! 2. Workers share no mutable state; local maxima merge in a final reduction
//! 3. The bitwise statistic is an approximation of the die, kept verbatim

// Module declarations
pub mod bits;
pub mod constants;
pub mod orchestrator;
pub mod rng;
pub mod session;

// Re-exports for convenience
pub use bits::popcount64;
pub use orchestrator::{
    run_naive, run_parallel, run_vectorized, run_worker, ParallelConfig, ParallelResult,
    RunConfig, RunResult, SimulationError,
};
pub use rng::Xorshift64;
