//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, deterministic random number generation.
//! CRITICAL: All randomness owned by this crate MUST go through this module's
//! [`Generator`], so that a single `set_random_seed` call pins every source.

mod xorshift;
pub mod process;

pub use xorshift::Generator;
