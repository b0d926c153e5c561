//! Benchmarks comparing the table + series kernels against libm.
//!
//! Run with: `cargo test -p exp_kernels --release bench_taylor -- --ignored --nocapture`

use ::bench::quick_bench;
use std::hint::black_box;

use super::*;
use crate::testing::random_inputs;

const INPUTS: usize = 1 << 12;

#[quick_bench(warmup_rounds = 2, rounds = 50, calls_per_round = 1000000)]
fn bench_taylor_kernels(b: ::bench::Bencher) {
    let inputs = random_inputs(INPUTS, 7);

    let variants: [(&str, fn(f32) -> f32); 7] = [
        ("libm", f32::exp),
        ("exp_taylor_1", exp_taylor_1),
        ("exp_taylor_1_unrolled", exp_taylor_1_unrolled),
        ("exp_taylor_2", exp_taylor_2),
        ("exp_taylor_3", exp_taylor_3),
        ("exp_taylor_4", exp_taylor_4),
        ("exp_taylor_4a", exp_taylor_4a),
    ];

    for (label, f) in variants {
        let mut i = 0;
        b.bench_labeled(label, || {
            i = (i + 1) & (INPUTS - 1);
            f(black_box(inputs[i]))
        });
    }
}
