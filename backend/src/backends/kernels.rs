//! GPU kernel selection: benchmark and deterministic switches
//!
//! Two process-global flags trade performance against reproducibility:
//!
//! - `benchmark` (default on): selection may time the candidate
//!   implementations once per (op, shape key), cache the fastest, and reuse
//!   the cached choice for matching shapes.
//! - `deterministic` (default off): only candidates with a reproducible
//!   accumulation order are eligible. An op with no such candidate fails at
//!   selection time, not when the flag is flipped.
//!
//! `set_random_seed` turns `benchmark` off and `deterministic` on, making
//! every subsequent selection fixed rather than adaptively measured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;

/// A candidate implementation of a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelVariant {
    /// Stable identifier, unique within one op's candidate list
    pub name: &'static str,
    /// Whether the implementation has a reproducible accumulation order
    pub deterministic: bool,
}

/// Failure to pick a kernel implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Deterministic mode is on and no candidate qualifies
    #[error("no deterministic implementation available for kernel '{op}'")]
    NoDeterministicImpl { op: String },

    /// The candidate list is empty
    #[error("kernel '{op}' has no registered implementations")]
    NoImplementations { op: String },
}

static BENCHMARK: AtomicBool = AtomicBool::new(true);
static DETERMINISTIC: AtomicBool = AtomicBool::new(false);

/// Benchmarked choices, keyed by (op, shape key), value is the variant name.
static AUTOTUNE_CACHE: Mutex<BTreeMap<(String, String), String>> = Mutex::new(BTreeMap::new());

fn cache() -> MutexGuard<'static, BTreeMap<(String, String), String>> {
    AUTOTUNE_CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Whether kernel autotuning is enabled.
pub fn benchmark() -> bool {
    BENCHMARK.load(Ordering::SeqCst)
}

/// Enable or disable kernel autotuning.
///
/// Disabling does not clear previously cached choices; it stops them from
/// being consulted, so selection falls back to the fixed candidate order.
pub fn set_benchmark(enabled: bool) {
    BENCHMARK.store(enabled, Ordering::SeqCst);
}

/// Whether deterministic-only selection is enabled.
pub fn deterministic() -> bool {
    DETERMINISTIC.load(Ordering::SeqCst)
}

/// Enable or disable deterministic-only selection.
///
/// Turning this on does not fail here even if some op has no deterministic
/// implementation; that op fails later, at its own selection.
pub fn set_deterministic(enabled: bool) {
    DETERMINISTIC.store(enabled, Ordering::SeqCst);
}

/// Drop every cached benchmark choice.
pub fn reset_autotune_cache() {
    cache().clear();
}

fn eligible<'a>(
    op: &str,
    variants: &'a [KernelVariant],
) -> Result<Vec<&'a KernelVariant>, KernelError> {
    if variants.is_empty() {
        return Err(KernelError::NoImplementations { op: op.to_string() });
    }
    if deterministic() {
        let kept: Vec<&KernelVariant> = variants.iter().filter(|v| v.deterministic).collect();
        if kept.is_empty() {
            return Err(KernelError::NoDeterministicImpl { op: op.to_string() });
        }
        Ok(kept)
    } else {
        Ok(variants.iter().collect())
    }
}

/// Pick an implementation for `op` without measuring: the first eligible
/// candidate in list order.
///
/// # Errors
/// [`KernelError::NoImplementations`] on an empty candidate list;
/// [`KernelError::NoDeterministicImpl`] when deterministic mode is on and no
/// candidate qualifies.
///
/// # Example
/// ```
/// use repro_core_rs::backends::kernels::{self, KernelVariant};
///
/// const CONV: &[KernelVariant] = &[
///     KernelVariant { name: "winograd", deterministic: false },
///     KernelVariant { name: "direct", deterministic: true },
/// ];
///
/// kernels::set_deterministic(true);
/// let chosen = kernels::select("conv2d", CONV).unwrap();
/// assert_eq!(chosen.name, "direct");
/// ```
pub fn select<'a>(op: &str, variants: &'a [KernelVariant]) -> Result<&'a KernelVariant, KernelError> {
    let kept = eligible(op, variants)?;
    Ok(kept[0])
}

/// Pick an implementation for `op` on inputs described by `shape_key`,
/// measuring with `measure` when benchmarking is enabled.
///
/// With `benchmark` on, every eligible candidate is measured once for this
/// (op, shape key), the fastest is cached, and later calls reuse the cached
/// choice without measuring. With `benchmark` off, this is [`select`]: the
/// first eligible candidate, no measurement, no cache.
///
/// A cached choice that deterministic mode later disqualifies is ignored and
/// re-resolved against the eligible set.
///
/// # Errors
/// Same conditions as [`select`].
pub fn select_with<'a, F>(
    op: &str,
    shape_key: &str,
    variants: &'a [KernelVariant],
    mut measure: F,
) -> Result<&'a KernelVariant, KernelError>
where
    F: FnMut(&KernelVariant) -> Duration,
{
    let kept = eligible(op, variants)?;
    if !benchmark() {
        return Ok(kept[0]);
    }

    let key = (op.to_string(), shape_key.to_string());
    {
        let cached_choices = cache();
        if let Some(name) = cached_choices.get(&key) {
            if let Some(cached) = kept.iter().copied().find(|v| v.name == name.as_str()) {
                return Ok(cached);
            }
        }
    }

    let mut best = kept[0];
    let mut best_time = measure(best);
    for &candidate in &kept[1..] {
        let time = measure(candidate);
        if time < best_time {
            best = candidate;
            best_time = time;
        }
    }
    cache().insert(key, best.name.to_string());
    Ok(best)
}
