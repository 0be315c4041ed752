//! Bit-parallel simulator: popcount approximation on a worker pool,
//! one billion trials.

use dice_simulator_core_rs::constants::PARALLEL_TRIALS;
use dice_simulator_core_rs::{run_parallel, ParallelConfig};

fn main() {
    let config = ParallelConfig::with_trials(PARALLEL_TRIALS);

    let result = run_parallel(&config).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    });

    println!("Highest Ones Roll: {}", result.highest);
    println!("Number of Roll Sessions: {}", result.trials);
    println!("On {} Threads", result.workers);
    println!("Total Elapsed Time: {:.3}s", result.elapsed.as_secs_f64());
}
