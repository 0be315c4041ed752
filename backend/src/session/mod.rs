//! Per-session statistic kernels
//!
//! A session is one simulated sequence of 231 die rolls producing a single
//! scalar outcome: the number of "ones". Three kernels compute it at
//! different levels of optimization:
//!
//! - **naive**: one roll at a time, per-face tally
//! - **vectorized**: 231 weighted success/failure samples, summed once
//! - **bitwise**: popcount approximation over xorshift64 draws
//!
//! The kernels take an explicit generator so ownership stays with the
//! calling worker; nothing here touches a shared randomness source.

pub mod bitwise;
pub mod naive;
pub mod vectorized;

pub use bitwise::approx_ones;
pub use naive::{roll_session, roll_tally};
pub use vectorized::sample_session;
