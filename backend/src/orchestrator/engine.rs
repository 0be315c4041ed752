//! Simulation engine - sequential runners and the parallel orchestrator
//!
//! Every runner follows the same shape: create one seeded generator, run
//! sessions, track the maximum ones count, report the count of sessions
//! executed and the wall-clock time.
//!
//! The parallel engine partitions the total trial count into near-equal
//! chunks by integer division (trailing remainder trials are dropped),
//! launches one worker per chunk with seed `base_seed + worker_index`,
//! joins, and reduces the per-worker maxima:
//!
//! ```text
//! Idle → Running (fan-out) → Completed (fan-in) → Reported
//! ```
//!
//! No retry and no partial results: a worker failure is fatal to the run.
//!
//! # Determinism
//!
//! Each worker owns its generator and local maximum; nothing is shared
//! during execution. Same trial count, worker count, and base seed give
//! identical results on any machine.

use std::time::{Duration, Instant};

use rand::distr::Bernoulli;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::BASE_SEED;
use crate::rng::Xorshift64;
use crate::session::{approx_ones, roll_session, sample_session};

// ============================================================================
// Configuration Types
// ============================================================================

/// Configuration for the sequential (naive and vectorized) runners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of sessions to simulate
    pub sessions: u64,

    /// RNG seed for deterministic simulation
    pub seed: u64,

    /// Stop early once a session reaches this many ones (None = run all)
    pub stop_at: Option<u32>,
}

/// Configuration for the parallel engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Total trial count, partitioned across workers
    pub trials: u64,

    /// Worker thread count; must be at least 1
    pub workers: usize,

    /// Worker `i` seeds its generator with `base_seed + i`
    pub base_seed: u64,
}

impl ParallelConfig {
    /// Config with the given trial count, one worker per available
    /// hardware thread, and the default base seed.
    pub fn with_trials(trials: u64) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            trials,
            workers,
            base_seed: BASE_SEED,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Result of a sequential run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Highest ones count observed in any session
    pub highest: u32,

    /// Number of sessions actually executed (early stop may end the run
    /// before the configured count)
    pub sessions: u64,

    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

/// Result of a parallel run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelResult {
    /// Highest approximate ones count observed by any worker
    pub highest: u32,

    /// Requested trial count (chunking drops at most `workers - 1` trials)
    pub trials: u64,

    /// Worker threads used
    pub workers: usize,

    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Random distribution setup error
    #[error("RNG error: {0}")]
    Rng(String),
}

// ============================================================================
// Sequential Runners
// ============================================================================

/// Shared session loop: run up to `config.sessions` sessions, keep the
/// maximum, honor the early-stop threshold.
fn run_sessions<F>(config: &RunConfig, mut session: F) -> RunResult
where
    F: FnMut() -> u32,
{
    let start = Instant::now();
    let mut highest = 0u32;
    let mut executed = 0u64;

    for _ in 0..config.sessions {
        let ones = session();
        executed += 1;
        if ones > highest {
            highest = ones;
        }
        if config.stop_at.is_some_and(|target| highest >= target) {
            break;
        }
    }

    RunResult {
        highest,
        sessions: executed,
        elapsed: start.elapsed(),
    }
}

/// Run the naive variant: one die roll at a time.
pub fn run_naive(config: &RunConfig) -> Result<RunResult, SimulationError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok(run_sessions(config, || roll_session(&mut rng)))
}

/// Run the vectorized variant: batch success/failure sampling.
pub fn run_vectorized(config: &RunConfig) -> Result<RunResult, SimulationError> {
    let dist =
        Bernoulli::from_ratio(1, 4).map_err(|e| SimulationError::Rng(e.to_string()))?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok(run_sessions(config, || sample_session(&dist, &mut rng)))
}

// ============================================================================
// Parallel Engine
// ============================================================================

/// Worker task: run `trials` bitwise sessions with one generator and
/// return the maximum statistic observed.
///
/// Strictly-greater-than replacement, so the first-seen maximum survives
/// ties. `trials == 0` returns 0.
///
/// # Example
/// ```
/// use dice_simulator_core_rs::run_worker;
///
/// let local_max = run_worker(1000, 42);
/// assert!(local_max <= 231);
/// ```
pub fn run_worker(trials: u64, seed: u64) -> u32 {
    let mut gen = Xorshift64::new(seed);
    let mut local_max = 0u32;
    for _ in 0..trials {
        let value = approx_ones(&mut gen);
        if value > local_max {
            local_max = value;
        }
    }
    local_max
}

/// Validate parallel configuration before launching
fn validate_config(config: &ParallelConfig) -> Result<(), SimulationError> {
    if config.workers == 0 {
        return Err(SimulationError::InvalidConfig(
            "worker count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Run the bit-parallel variant across a fixed-size worker pool.
///
/// Fan-out: one worker task per worker index, each with its own generator
/// seeded `base_seed + index`. Fan-in: join, then reduce local maxima with
/// `max`. Workers with colliding seeds degrade randomness quality but are
/// not rejected.
///
/// # Errors
///
/// * `InvalidConfig` - worker count is zero (chunk division would be
///   undefined)
/// * `ThreadPool` - the worker pool could not be built; fatal, no retry
pub fn run_parallel(config: &ParallelConfig) -> Result<ParallelResult, SimulationError> {
    validate_config(config)?;

    // Integer division; at most `workers - 1` trailing trials are dropped.
    let chunk = config.trials / config.workers as u64;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;

    let base_seed = config.base_seed;
    let start = Instant::now();
    let highest = pool.install(|| {
        (0..config.workers as u64)
            .into_par_iter()
            .map(|index| run_worker(chunk, base_seed.wrapping_add(index)))
            .max()
            .unwrap_or(0)
    });
    let elapsed = start.elapsed();

    Ok(ParallelResult {
        highest,
        trials: config.trials,
        workers: config.workers,
        elapsed,
    })
}
