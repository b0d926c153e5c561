//! Shared helpers for kernel tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::CUTOFF;

/// Every multiple of 1/4096 in `[-16, 0]`, ascending.
pub fn dense_inputs() -> Vec<f32> {
    (0..=16 * 4096)
        .rev()
        .map(|i| -(i as f32) / 4096.0)
        .collect()
}

/// Reproducible uniform samples from `(-16, 0]`.
pub fn random_inputs(count: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| -rng.random_range(0.0f32..16.0))
        .collect()
}

/// Largest `|f(x) - exp(x)|` over `inputs` and the input producing it,
/// measured against the f64 exponential.
pub fn max_abs_error(f: fn(f32) -> f32, inputs: &[f32]) -> (f64, f32) {
    inputs
        .iter()
        .map(|&x| ((f(x) as f64 - (x as f64).exp()).abs(), x))
        .fold((0.0, 0.0), |max, cur| if cur.0 > max.0 { cur } else { max })
}

pub fn assert_within_bound(name: &str, f: fn(f32) -> f32, bound: f32) {
    let mut inputs = dense_inputs();
    inputs.extend(random_inputs(100_000, 0x5eed));

    let (err, at) = max_abs_error(f, &inputs);
    assert!(
        err <= bound as f64,
        "{name}: max abs error {err:.3e} at x = {at} exceeds bound {bound:.1e}"
    );
    println!("{name}: max abs error {err:.3e} at x = {at}");
}

/// Over ascending inputs the result may only drop by less than `tolerance`.
pub fn assert_monotonic(name: &str, f: fn(f32) -> f32, tolerance: f32) {
    let inputs = dense_inputs();
    for pair in inputs.windows(2) {
        let (lo, hi) = (f(pair[0]), f(pair[1]));
        assert!(
            hi >= lo - tolerance,
            "{name}: f({}) = {lo} but f({}) = {hi}",
            pair[0],
            pair[1]
        );
    }
}

pub fn assert_non_negative(name: &str, f: fn(f32) -> f32) {
    for x in dense_inputs() {
        let y = f(x);
        assert!(y >= 0.0, "{name}({x}) = {y} is negative");
    }
}

pub fn assert_cutoff(name: &str, f: fn(f32) -> f32) {
    for x in [CUTOFF, -16.5, -20.0, -87.0, -1.0e6, f32::MIN, f32::NEG_INFINITY] {
        assert_eq!(f(x), 0.0, "{name}({x}) should be exactly 0");
    }
}

/// Inputs no kernel is specified for; they must still not panic.
pub fn out_of_domain_inputs() -> [f32; 6] {
    [0.25, 3.0, 1.0e9, f32::INFINITY, f32::NAN, f32::MIN_POSITIVE]
}
