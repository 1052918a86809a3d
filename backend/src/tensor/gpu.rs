//! Per-device GPU generator registry
//!
//! GPU RNG state is initialized lazily, the way GPU runtimes bring devices up:
//! the registry is empty until the embedding runtime calls [`init`] with the
//! discovered device count. Seeds that arrive before that moment are recorded
//! and applied at `init`, so seeding on a machine with no GPU is a no-op that
//! still leaves the right state behind if devices appear later.
//!
//! # Key Principles
//!
//! 1. **One generator per device**: streams advance independently
//! 2. **Recorded seeds**: `manual_seed`/`manual_seed_all` before `init` never
//!    fail; the last recorded value seeds every device at `init`
//! 3. **Typed failures**: addressing a missing or out-of-range device is a
//!    [`DeviceError`], surfaced to the caller untouched

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::rng::Generator;
use crate::seed::DEFAULT_SEED;

/// Failure to address a GPU device.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The registry has no devices (not initialized, or initialized with 0)
    #[error("GPU backend is not initialized")]
    Unavailable,

    /// The index does not name a registered device
    #[error("invalid device index {index}: {count} devices present")]
    InvalidIndex { index: usize, count: usize },
}

struct Registry {
    generators: Vec<Generator>,
    current: usize,
    /// Last seed recorded for all devices; applied at `init`
    pending: Option<u64>,
}

static REGISTRY: Mutex<Registry> = Mutex::new(Registry {
    generators: Vec::new(),
    current: 0,
    pending: None,
});

fn lock() -> MutexGuard<'static, Registry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// (Re)build the registry with `device_count` devices.
///
/// Every device's generator is seeded with the last recorded seed, or the
/// crate default if none was recorded. The current device resets to 0.
/// Calling `init` again replaces the registry; `init(0)` models a machine
/// with no GPU.
pub fn init(device_count: usize) {
    let mut reg = lock();
    let seed = reg.pending.unwrap_or(DEFAULT_SEED);
    reg.generators = (0..device_count).map(|_| Generator::new(seed)).collect();
    reg.current = 0;
}

/// Whether any GPU device is registered.
pub fn is_available() -> bool {
    !lock().generators.is_empty()
}

/// Number of registered devices.
pub fn device_count() -> usize {
    lock().generators.len()
}

/// Index of the current device.
pub fn current_device() -> usize {
    lock().current
}

/// Make `index` the current device.
///
/// # Errors
/// [`DeviceError::Unavailable`] if no devices are registered,
/// [`DeviceError::InvalidIndex`] if `index` is out of range.
pub fn set_device(index: usize) -> Result<(), DeviceError> {
    let mut reg = lock();
    let count = reg.generators.len();
    if count == 0 {
        return Err(DeviceError::Unavailable);
    }
    if index >= count {
        return Err(DeviceError::InvalidIndex { index, count });
    }
    reg.current = index;
    Ok(())
}

/// Seed the current device's generator.
///
/// Before `init` there is no current device; the value is recorded and will
/// seed every device when `init` runs. Never fails.
pub fn manual_seed(seed: u64) {
    let mut reg = lock();
    if reg.generators.is_empty() {
        reg.pending = Some(seed);
    } else {
        let current = reg.current;
        reg.generators[current].reseed(seed);
    }
}

/// Seed every registered device's generator, and record the value so devices
/// registered by a later `init` start from it too. Never fails.
pub fn manual_seed_all(seed: u64) {
    let mut reg = lock();
    reg.pending = Some(seed);
    for g in &mut reg.generators {
        g.reseed(seed);
    }
}

/// Draw the next u64 from the given device's generator.
///
/// # Errors
/// [`DeviceError`] if the registry is empty or `index` is out of range.
pub fn next_u64_on(index: usize) -> Result<u64, DeviceError> {
    with_generator(index, Generator::next_u64)
}

/// Run `f` against the given device's generator.
pub(crate) fn with_generator<R>(
    index: usize,
    f: impl FnOnce(&mut Generator) -> R,
) -> Result<R, DeviceError> {
    let mut reg = lock();
    let count = reg.generators.len();
    if count == 0 {
        return Err(DeviceError::Unavailable);
    }
    let generator = reg
        .generators
        .get_mut(index)
        .ok_or(DeviceError::InvalidIndex { index, count })?;
    Ok(f(generator))
}
