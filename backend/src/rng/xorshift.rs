//! xorshift64* random number generator
//!
//! The single PRNG algorithm behind every random-number source this crate
//! owns: the process RNG, the array RNG, the tensor CPU generator, and the
//! per-device GPU generators. One algorithm everywhere means one set of
//! reproducibility guarantees everywhere.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence, on every platform and build. The generator
//! holds no hidden state: a `Generator` re-seeded with the same value is
//! indistinguishable from a freshly constructed one.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use repro_core_rs::Generator;
///
/// let mut g = Generator::new(12345);
/// let value = g.next_u64();
/// let ranged = g.range(0, 100); // [0, 100)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generator {
    /// Internal state (64-bit)
    state: u64,
}

impl Generator {
    /// Create a new generator with the given seed.
    ///
    /// A seed of zero is remapped to 1: xorshift requires nonzero state, so
    /// seeds 0 and 1 produce the same sequence. Every other `u64` is accepted
    /// as-is.
    ///
    /// # Example
    /// ```
    /// use repro_core_rs::Generator;
    ///
    /// let g = Generator::new(12345);
    /// ```
    pub const fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Re-seed in place, discarding all prior state.
    ///
    /// Equivalent to replacing the generator with `Generator::new(seed)`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Generate the next random u64 value.
    ///
    /// # Example
    /// ```
    /// use repro_core_rs::Generator;
    ///
    /// let mut g = Generator::new(12345);
    /// let a = g.next_u64();
    /// let b = g.next_u64();
    /// assert_ne!(a, b);
    /// ```
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in [0.0, 1.0) with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random value in range [min, max).
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use repro_core_rs::Generator;
    ///
    /// let mut g = Generator::new(12345);
    /// let die = g.range(1, 7);
    /// assert!((1..7).contains(&die));
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next_u64();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Sample the standard normal distribution (mean 0, variance 1).
    ///
    /// Box-Muller transform over two uniform draws. The first uniform is
    /// reflected to (0.0, 1.0] so `ln` never sees zero.
    pub fn standard_normal(&mut self) -> f64 {
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}
