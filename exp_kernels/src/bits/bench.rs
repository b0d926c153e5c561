//! Run with: `cargo test -p exp_kernels --release bench_bits -- --ignored --nocapture`

use ::bench::quick_bench;
use std::hint::black_box;

use super::*;
use crate::testing::random_inputs;

const INPUTS: usize = 1 << 12;

#[quick_bench(warmup_rounds = 2, rounds = 50, calls_per_round = 1000000)]
fn bench_bits_kernels(b: ::bench::Bencher) {
    let inputs = random_inputs(INPUTS, 13);

    let variants: [(&str, fn(f32) -> f32); 3] = [
        ("libm", f32::exp),
        ("fastexp", fastexp),
        ("fasterexp", fasterexp),
    ];

    for (label, f) in variants {
        let mut i = 0;
        b.bench_labeled(label, || {
            i = (i + 1) & (INPUTS - 1);
            f(black_box(inputs[i]))
        });
    }
}
