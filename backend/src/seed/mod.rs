//! Seed initialization for reproducible stochastic computation
//!
//! One call, made once at process startup, pins every random-number source
//! this crate owns and flips the kernel backend into its reproducible mode.
//! After it returns, the same seed plus the same sequence of draws and kernel
//! selections yields bit-identical results on the same build.
//!
//! # Key Principles
//!
//! 1. **Explicit, once, early**: the caller injects the seed before any
//!    stochastic work; nothing seeds itself behind the caller's back
//! 2. **Same value everywhere**: every target receives the same integer
//! 3. **Independent targets**: no target's seeding depends on another's
//!    outcome, so the order below is convention, not contract
//!
//! # Example
//!
//! ```
//! use repro_core_rs::{rng::process, set_random_seed};
//!
//! set_random_seed(42);
//! let first = process::next_u64();
//!
//! set_random_seed(42);
//! assert_eq!(process::next_u64(), first);
//! ```

use crate::{array, backends::kernels, rng, tensor};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 12;

/// Environment variable fixing the hash-randomization seed of Python
/// interpreters launched from this process.
pub const HASH_SEED_ENV: &str = "PYTHONHASHSEED";

/// Seed every random-number source and configure the kernel backend for
/// reproducible execution.
///
/// Side effects, all with the same `seed` value:
///
/// 1. seeds the process RNG ([`rng::process::seed`])
/// 2. sets [`HASH_SEED_ENV`] to the decimal string of the seed
/// 3. seeds the array RNG ([`array::seed`])
/// 4. seeds the tensor CPU generator ([`tensor::manual_seed`])
/// 5. seeds the current GPU device ([`tensor::gpu::manual_seed`]) and all
///    GPU devices ([`tensor::gpu::manual_seed_all`])
/// 6. disables kernel autotuning ([`kernels::set_benchmark`] off)
/// 7. enables deterministic-only kernel selection
///    ([`kernels::set_deterministic`] on)
///
/// Hash-seed caveat: an environment variable only reaches interpreters
/// launched *after* this call. A Python process already running (including
/// one hosting this crate as an extension module) keeps the hash
/// randomization it started with.
///
/// GPU caveat: with no devices registered, GPU seeding records the value and
/// [`tensor::gpu::init`] applies it later; it never fails. Deterministic-only
/// selection can fail *later*, at an op with no deterministic implementation;
/// this call does not fail on that condition.
///
/// Call this once, early, before concurrent stochastic work begins. Each
/// individual target update is atomic, but the call as a whole is not:
/// a concurrent caller with a different seed can leave targets mixed.
///
/// # Example
/// ```
/// use repro_core_rs::{set_random_seed, HASH_SEED_ENV};
///
/// set_random_seed(42);
/// assert_eq!(std::env::var(HASH_SEED_ENV).unwrap(), "42");
/// ```
pub fn set_random_seed(seed: u64) {
    rng::process::seed(seed);

    std::env::set_var(HASH_SEED_ENV, seed.to_string());

    array::seed(seed);

    tensor::manual_seed(seed);
    tensor::gpu::manual_seed(seed);
    tensor::gpu::manual_seed_all(seed);

    kernels::set_benchmark(false);
    kernels::set_deterministic(true);
}
