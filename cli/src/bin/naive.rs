//! Naive simulator: one die roll at a time, one million sessions.
//!
//! Stops early if a session ever reaches the target ones count.

use dice_simulator_core_rs::constants::{BASE_SEED, DEFAULT_SESSIONS, TARGET_ONES};
use dice_simulator_core_rs::{run_naive, RunConfig};

fn main() {
    let config = RunConfig {
        sessions: DEFAULT_SESSIONS,
        seed: BASE_SEED,
        stop_at: Some(TARGET_ONES),
    };

    let result = run_naive(&config).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    });

    println!("Highest Ones Roll: {}", result.highest);
    println!("Number of Roll Sessions: {}", result.sessions);
    println!("Total Elapsed Time: {:.1}s", result.elapsed.as_secs_f64());
}
