//! Tests for the simulation runners and the parallel engine

use dice_simulator_core_rs::{
    run_naive, run_parallel, run_vectorized, run_worker, ParallelConfig, RunConfig,
    SimulationError,
};

fn sequential_config(sessions: u64) -> RunConfig {
    RunConfig {
        sessions,
        seed: 42,
        stop_at: None,
    }
}

// ============================================================================
// Worker task
// ============================================================================

#[test]
fn test_worker_zero_trials_returns_zero() {
    assert_eq!(run_worker(0, 42), 0);
}

#[test]
fn test_worker_single_trial_seed_42() {
    // End-to-end: seed=42, n=1 is exactly the first session statistic
    assert_eq!(run_worker(1, 42), 55);
}

#[test]
fn test_worker_ten_trials_seed_42() {
    // Max over the first ten session values for seed 42
    assert_eq!(run_worker(10, 42), 67);
}

#[test]
fn test_worker_maximum_monotone_in_trial_count() {
    let mut previous = 0;
    for trials in [0u64, 1, 10, 100, 1000, 5000] {
        let current = run_worker(trials, 42);
        assert!(
            current >= previous,
            "maximum decreased: {} trials gave {}, fewer gave {}",
            trials,
            current,
            previous
        );
        previous = current;
    }
}

#[test]
fn test_worker_deterministic() {
    assert_eq!(run_worker(1000, 7), run_worker(1000, 7));
}

// ============================================================================
// Parallel engine
// ============================================================================

#[test]
fn test_parallel_zero_workers_rejected() {
    let config = ParallelConfig {
        trials: 1000,
        workers: 0,
        base_seed: 42,
    };
    let err = run_parallel(&config).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidConfig(_)));
}

#[test]
fn test_parallel_matches_sequential_reduction() {
    // The reduced maximum must equal running every worker chunk
    // sequentially with the same seed assignment.
    let config = ParallelConfig {
        trials: 1000,
        workers: 4,
        base_seed: 42,
    };
    let result = run_parallel(&config).expect("parallel run failed");

    let chunk = config.trials / config.workers as u64;
    let expected = (0..config.workers as u64)
        .map(|index| run_worker(chunk, config.base_seed + index))
        .max()
        .unwrap();

    assert_eq!(result.highest, expected);
    assert_eq!(result.trials, 1000);
    assert_eq!(result.workers, 4);
}

#[test]
fn test_parallel_deterministic_across_runs() {
    let config = ParallelConfig {
        trials: 4000,
        workers: 4,
        base_seed: 42,
    };
    let first = run_parallel(&config).expect("parallel run failed");
    let second = run_parallel(&config).expect("parallel run failed");
    assert_eq!(first.highest, second.highest);
}

#[test]
fn test_parallel_remainder_trials_dropped() {
    // 1003 trials over 4 workers chunks to 250 each; the 3 leftover
    // trials never run, so the result matches the even 1000-trial run.
    let uneven = ParallelConfig {
        trials: 1003,
        workers: 4,
        base_seed: 42,
    };
    let even = ParallelConfig {
        trials: 1000,
        workers: 4,
        base_seed: 42,
    };
    let uneven_result = run_parallel(&uneven).expect("parallel run failed");
    let even_result = run_parallel(&even).expect("parallel run failed");
    assert_eq!(uneven_result.highest, even_result.highest);
    // The report still carries the requested trial count
    assert_eq!(uneven_result.trials, 1003);
}

#[test]
fn test_parallel_single_worker_equals_worker_task() {
    let config = ParallelConfig {
        trials: 500,
        workers: 1,
        base_seed: 9,
    };
    let result = run_parallel(&config).expect("parallel run failed");
    assert_eq!(result.highest, run_worker(500, 9));
}

// ============================================================================
// Sequential runners
// ============================================================================

#[test]
fn test_naive_runner_executes_all_sessions() {
    let result = run_naive(&sequential_config(200)).expect("naive run failed");
    assert_eq!(result.sessions, 200);
    assert!(result.highest <= 231);
}

#[test]
fn test_naive_runner_deterministic() {
    let first = run_naive(&sequential_config(500)).expect("naive run failed");
    let second = run_naive(&sequential_config(500)).expect("naive run failed");
    assert_eq!(first.highest, second.highest);
}

#[test]
fn test_naive_runner_early_stop() {
    // A threshold of 0 is reached by the very first session
    let config = RunConfig {
        sessions: 1000,
        seed: 42,
        stop_at: Some(0),
    };
    let result = run_naive(&config).expect("naive run failed");
    assert_eq!(result.sessions, 1);
}

#[test]
fn test_naive_runner_zero_sessions() {
    let result = run_naive(&sequential_config(0)).expect("naive run failed");
    assert_eq!(result.highest, 0);
    assert_eq!(result.sessions, 0);
}

#[test]
fn test_vectorized_runner_executes_all_sessions() {
    let result = run_vectorized(&sequential_config(200)).expect("vectorized run failed");
    assert_eq!(result.sessions, 200);
    assert!(result.highest <= 231);
}

#[test]
fn test_vectorized_runner_deterministic() {
    let first = run_vectorized(&sequential_config(500)).expect("vectorized run failed");
    let second = run_vectorized(&sequential_config(500)).expect("vectorized run failed");
    assert_eq!(first.highest, second.highest);
}

#[test]
fn test_runner_maximum_monotone_in_session_count() {
    let short = run_naive(&sequential_config(100)).expect("naive run failed");
    let long = run_naive(&sequential_config(1000)).expect("naive run failed");
    assert!(long.highest >= short.highest);
}
