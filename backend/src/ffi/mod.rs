//! Python interface
//!
//! This crate began life as a Python training utility; the FFI surface keeps
//! that call shape: one function, one optional integer argument. Everything
//! else stays on the Rust side.

pub mod seed;
