//! Tensor-computation backend RNG state
//!
//! Holds the generators a tensor library consults when it materializes random
//! tensors: one CPU generator, plus one generator per GPU device (see
//! [`gpu`]). `set_random_seed` pins all of them.
//!
//! Tensors are f32 and backed by [`ndarray`] on the host; a device fill draws
//! from that device's generator so per-device sequences can be observed and
//! reproduced without a driver present.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::rng::Generator;
use crate::seed::DEFAULT_SEED;

pub mod gpu;

pub use gpu::DeviceError;

/// Where a tensor's random fill is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    /// The process-wide CPU generator
    Cpu,
    /// The GPU device with this index in the registry
    Gpu(usize),
}

static CPU_GENERATOR: Mutex<Generator> = Mutex::new(Generator::new(DEFAULT_SEED));

fn lock_cpu() -> MutexGuard<'static, Generator> {
    CPU_GENERATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Re-seed the CPU generator, discarding all prior state.
///
/// # Example
/// ```
/// use repro_core_rs::tensor;
///
/// tensor::manual_seed(42);
/// let a = tensor::randn(&[4]);
///
/// tensor::manual_seed(42);
/// assert_eq!(a, tensor::randn(&[4]));
/// ```
pub fn manual_seed(seed: u64) {
    lock_cpu().reseed(seed);
}

/// Tensor of the given shape filled with uniform f32 samples in [0.0, 1.0),
/// drawn from the CPU generator.
pub fn rand(shape: &[usize]) -> ArrayD<f32> {
    let mut g = lock_cpu();
    ArrayD::from_shape_fn(IxDyn(shape), |_| g.next_f64() as f32)
}

/// Tensor of the given shape filled with standard-normal f32 samples, drawn
/// from the CPU generator.
pub fn randn(shape: &[usize]) -> ArrayD<f32> {
    let mut g = lock_cpu();
    ArrayD::from_shape_fn(IxDyn(shape), |_| g.standard_normal() as f32)
}

/// Uniform [0.0, 1.0) fill drawn from the given device's generator.
///
/// # Errors
/// [`DeviceError`] if the device is a GPU and the registry is empty or the
/// index is out of range.
pub fn rand_on(device: Device, shape: &[usize]) -> Result<ArrayD<f32>, DeviceError> {
    match device {
        Device::Cpu => Ok(rand(shape)),
        Device::Gpu(index) => gpu::with_generator(index, |g| {
            ArrayD::from_shape_fn(IxDyn(shape), |_| g.next_f64() as f32)
        }),
    }
}

/// Standard-normal fill drawn from the given device's generator.
///
/// # Errors
/// [`DeviceError`] if the device is a GPU and the registry is empty or the
/// index is out of range.
pub fn randn_on(device: Device, shape: &[usize]) -> Result<ArrayD<f32>, DeviceError> {
    match device {
        Device::Cpu => Ok(randn(shape)),
        Device::Gpu(index) => gpu::with_generator(index, |g| {
            ArrayD::from_shape_fn(IxDyn(shape), |_| g.standard_normal() as f32)
        }),
    }
}
