//! Repro Core - Rust Engine
//!
//! Reproducibility core for stochastic computation: one call seeds every
//! random-number source in the process and pins the GPU kernel backend to
//! deterministic behavior.
//!
//! # Architecture
//!
//! - **seed**: the single public operation, `set_random_seed`
//! - **rng**: the xorshift64* generator and the process-global RNG
//! - **array**: numeric-array sampling with a global RNG
//! - **tensor**: tensor CPU generator and per-GPU-device generators
//! - **backends**: kernel-selection flags (benchmark, deterministic)
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded xorshift64*)
//! 2. Every source receives the same seed value from `set_random_seed`
//! 3. FFI boundary is minimal and safe
//!
//! # Example
//!
//! ```
//! use repro_core_rs::{array, rng::process, set_random_seed, tensor};
//!
//! set_random_seed(42);
//! let draw = process::next_u64();
//! let weights = tensor::randn(&[4, 4]);
//! let batch = array::permutation(16);
//!
//! set_random_seed(42);
//! assert_eq!(process::next_u64(), draw);
//! assert_eq!(tensor::randn(&[4, 4]), weights);
//! assert_eq!(array::permutation(16), batch);
//! ```

// Module declarations
pub mod array;
pub mod backends;
pub mod rng;
pub mod seed;
pub mod tensor;

// Re-exports for convenience
pub use backends::kernels::{KernelError, KernelVariant};
pub use rng::Generator;
pub use seed::{set_random_seed, DEFAULT_SEED, HASH_SEED_ENV};
pub use tensor::{Device, DeviceError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn repro_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::seed::set_random_seed, m)?)?;
    m.add("DEFAULT_SEED", DEFAULT_SEED)?;
    Ok(())
}
