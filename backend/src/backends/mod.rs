//! Numerical backend configuration
//!
//! Process-wide switches that govern how the numerical backends run; today
//! that is the GPU kernel-selection backend in [`kernels`].

pub mod kernels;
