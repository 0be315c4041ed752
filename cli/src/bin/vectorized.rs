//! Vectorized simulator: batch success/failure sampling, one million
//! sessions.

use dice_simulator_core_rs::constants::{BASE_SEED, DEFAULT_SESSIONS};
use dice_simulator_core_rs::{run_vectorized, RunConfig};

fn main() {
    let config = RunConfig {
        sessions: DEFAULT_SESSIONS,
        seed: BASE_SEED,
        stop_at: None,
    };

    let result = run_vectorized(&config).unwrap_or_else(|e| {
        eprintln!("Simulation failed: {}", e);
        std::process::exit(1);
    });

    println!("Highest Ones Roll: {}", result.highest);
    println!("Number of Roll Sessions: {}", result.sessions);
    println!("Total Elapsed Time: {:.1}s", result.elapsed.as_secs_f64());
}
