//! PyO3 wrapper for the seed initializer
//!
//! # Example (from Python)
//!
//! ```python
//! from repro._core import set_random_seed
//!
//! set_random_seed()        # default seed 12
//! set_random_seed(42)
//! ```

use pyo3::prelude::*;

use crate::seed::DEFAULT_SEED;

/// Seed every random-number source and configure the kernel backend for
/// reproducible execution.
///
/// # Arguments
///
/// * `seed` - Seed value, defaults to 12
///
/// # Errors
///
/// A seed outside the u64 range (negative, or >= 2**64) raises the
/// interpreter's own OverflowError during argument conversion; nothing is
/// seeded in that case. The call itself cannot fail.
#[pyfunction]
#[pyo3(signature = (seed = DEFAULT_SEED))]
pub fn set_random_seed(seed: u64) {
    crate::seed::set_random_seed(seed);
}
