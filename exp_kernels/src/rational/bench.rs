//! Benchmarks for the rational and double lookup kernels against their closest
//! series counterparts.
//!
//! Run with: `cargo test -p exp_kernels --release bench_rational -- --ignored --nocapture`

use ::bench::quick_bench;
use std::hint::black_box;

use super::*;
use crate::testing::random_inputs;
use crate::{exp_double_lookup, exp_taylor_1, exp_taylor_2};

const INPUTS: usize = 1 << 12;

#[quick_bench(warmup_rounds = 2, rounds = 50, calls_per_round = 1000000)]
fn bench_rational_kernels(b: ::bench::Bencher) {
    let inputs = random_inputs(INPUTS, 11);

    let variants: [(&str, fn(f32) -> f32); 5] = [
        ("exp_taylor_1", exp_taylor_1),
        ("exp_rational_1", exp_rational_1),
        ("exp_taylor_2", exp_taylor_2),
        ("exp_rational_2", exp_rational_2),
        ("exp_double_lookup", exp_double_lookup),
    ];

    for (label, f) in variants {
        let mut i = 0;
        b.bench_labeled(label, || {
            i = (i + 1) & (INPUTS - 1);
            f(black_box(inputs[i]))
        });
    }
}
