//! Deterministic random number generation
//!
//! Uses the xorshift64 algorithm for fast, deterministic random number
//! generation. CRITICAL: all randomness in the bitwise simulation MUST go
//! through this module, one generator instance per worker.

mod xorshift;

pub use xorshift::Xorshift64;
