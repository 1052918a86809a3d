//! Process-global general-purpose RNG
//!
//! The analogue of a language runtime's ambient random module: one generator
//! for the whole process, reachable without threading a handle through every
//! call site.
//!
//! # Key Principles
//!
//! 1. **One global**: all draws advance the same generator state
//! 2. **Seed first**: callers are expected to run `set_random_seed` once,
//!    early, before any draw; the pre-seed state is fixed but meaningless
//! 3. **No hidden locking contract**: the mutex makes individual draws sound,
//!    not whole computations atomic; concurrent callers interleave
//!
//! # Example
//!
//! ```
//! use repro_core_rs::rng::process;
//!
//! process::seed(42);
//! let first = process::next_u64();
//!
//! process::seed(42);
//! assert_eq!(process::next_u64(), first);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Generator;
use crate::seed::DEFAULT_SEED;

static PROCESS_RNG: Mutex<Generator> = Mutex::new(Generator::new(DEFAULT_SEED));

fn lock() -> MutexGuard<'static, Generator> {
    PROCESS_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Re-seed the process RNG, discarding all prior state.
pub fn seed(seed: u64) {
    lock().reseed(seed);
}

/// Draw the next u64 from the process RNG.
pub fn next_u64() -> u64 {
    lock().next_u64()
}

/// Draw an f64 in [0.0, 1.0) from the process RNG.
pub fn next_f64() -> f64 {
    lock().next_f64()
}

/// Draw an i64 in [min, max) from the process RNG.
///
/// # Panics
/// Panics if min >= max
pub fn range(min: i64, max: i64) -> i64 {
    lock().range(min, max)
}

/// Shuffle a slice in place (Fisher-Yates, back to front).
///
/// # Example
/// ```
/// use repro_core_rs::rng::process;
///
/// process::seed(7);
/// let mut deck: Vec<u32> = (0..52).collect();
/// process::shuffle(&mut deck);
///
/// process::seed(7);
/// let mut again: Vec<u32> = (0..52).collect();
/// process::shuffle(&mut again);
/// assert_eq!(deck, again);
/// ```
pub fn shuffle<T>(slice: &mut [T]) {
    let mut g = lock();
    for i in (1..slice.len()).rev() {
        let j = g.range(0, (i + 1) as i64) as usize;
        slice.swap(i, j);
    }
}
