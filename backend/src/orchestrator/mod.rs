//! Orchestrator - simulation runners
//!
//! Sequential runners for the naive and vectorized variants, the worker
//! task for the bitwise variant, and the parallel engine that fans workers
//! out and reduces their local maxima.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{
    run_naive, run_parallel, run_vectorized, run_worker, ParallelConfig, ParallelResult,
    RunConfig, RunResult, SimulationError,
};
