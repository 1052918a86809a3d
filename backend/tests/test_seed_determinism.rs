//! Tests for seed determinism
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence
//! from every source `set_random_seed` initializes.
//!
//! All sources are process-global, so re-seeding is equivalent to a fresh
//! process; every test below re-seeds and compares full sequences. Tests in
//! this binary share that global state and therefore serialize on a lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use proptest::prelude::*;
use repro_core_rs::rng::process;
use repro_core_rs::{array, set_random_seed, tensor, Generator};

fn global_state_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_scenario_seed_42_single_draw() {
    let _guard = global_state_lock();

    set_random_seed(42);
    let first = process::next_u64();

    set_random_seed(42);
    let second = process::next_u64();

    assert_eq!(first, second, "seed 42 must reproduce the first draw");
}

#[test]
fn test_process_rng_sequence_repeats() {
    let _guard = global_state_lock();

    set_random_seed(12345);
    let seq1: Vec<u64> = (0..100).map(|_| process::next_u64()).collect();

    set_random_seed(12345);
    let seq2: Vec<u64> = (0..100).map(|_| process::next_u64()).collect();

    assert_eq!(seq1, seq2, "process RNG not deterministic!");
}

#[test]
fn test_array_sampling_repeats() {
    let _guard = global_state_lock();

    set_random_seed(777);
    let uniform1 = array::random(&[3, 4]);
    let normal1 = array::standard_normal(&[8]);
    let ints1 = array::randint(0, 1000, &[16]);
    let perm1 = array::permutation(32);

    set_random_seed(777);
    assert_eq!(uniform1, array::random(&[3, 4]));
    assert_eq!(normal1, array::standard_normal(&[8]));
    assert_eq!(ints1, array::randint(0, 1000, &[16]));
    assert_eq!(perm1, array::permutation(32));
}

#[test]
fn test_tensor_cpu_sampling_repeats() {
    let _guard = global_state_lock();

    set_random_seed(2024);
    let uniform1 = tensor::rand(&[2, 2, 2]);
    let normal1 = tensor::randn(&[10]);

    set_random_seed(2024);
    assert_eq!(uniform1, tensor::rand(&[2, 2, 2]));
    assert_eq!(normal1, tensor::randn(&[10]));
}

#[test]
fn test_shuffle_repeats() {
    let _guard = global_state_lock();

    set_random_seed(9);
    let mut deck1: Vec<u32> = (0..52).collect();
    process::shuffle(&mut deck1);

    set_random_seed(9);
    let mut deck2: Vec<u32> = (0..52).collect();
    process::shuffle(&mut deck2);

    assert_eq!(deck1, deck2, "shuffle not deterministic!");
}

#[test]
fn test_every_source_receives_the_same_seed() {
    let _guard = global_state_lock();

    // Process, array and tensor-CPU sources all start from the same value,
    // so their first raw draw matches a fresh generator with that seed.
    set_random_seed(5);
    let expected = Generator::new(5).next_u64();

    assert_eq!(process::next_u64(), expected);

    set_random_seed(5);
    let uniform = array::random(&[1]);
    assert_eq!(uniform[[0]], Generator::new(5).next_f64());

    set_random_seed(5);
    let tensor_uniform = tensor::rand(&[1]);
    assert_eq!(tensor_uniform[[0]], Generator::new(5).next_f64() as f32);
}

#[test]
fn test_reseeding_leaves_no_residual_state() {
    let _guard = global_state_lock();

    // Seed s1, consume from every source, then seed s2: the state must be
    // exactly what seeding s2 alone produces.
    set_random_seed(1111);
    let _ = process::next_u64();
    let _ = array::random(&[4]);
    let _ = tensor::randn(&[4]);
    set_random_seed(2222);

    let after_s1: Vec<u64> = (0..20).map(|_| process::next_u64()).collect();
    let array_after_s1 = array::random(&[5]);
    let tensor_after_s1 = tensor::rand(&[5]);

    set_random_seed(2222);
    let fresh: Vec<u64> = (0..20).map(|_| process::next_u64()).collect();

    assert_eq!(after_s1, fresh, "earlier seed leaked into process RNG");
    assert_eq!(array_after_s1, array::random(&[5]));
    assert_eq!(tensor_after_s1, tensor::rand(&[5]));
}

#[test]
fn test_different_seeds_different_sequences() {
    let _guard = global_state_lock();

    set_random_seed(42);
    let a = process::next_u64();

    set_random_seed(99);
    let b = process::next_u64();

    assert_ne!(a, b, "Different seeds should produce different values");
}

proptest! {
    #[test]
    fn prop_same_seed_same_draws(seed in any::<u64>()) {
        let _guard = global_state_lock();

        set_random_seed(seed);
        let first: Vec<u64> = (0..8).map(|_| process::next_u64()).collect();
        let array_first = array::random(&[4]);

        set_random_seed(seed);
        let second: Vec<u64> = (0..8).map(|_| process::next_u64()).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(array_first, array::random(&[4]));
    }
}
