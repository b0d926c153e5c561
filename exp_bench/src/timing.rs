//! Per-call timing of kernels fed from an [`InputSampler`].

use bench::{BenchResult, Bencher};
use rand::RngCore;

use crate::config::BenchConfig;
use crate::sampler::InputSampler;

pub struct Timing {
    pub result: BenchResult,
    /// Sum of every kernel result, warmup included.
    pub sink: f64,
}

/// The cheapest possible kernel; timing it measures the harness loop itself.
pub fn identity(x: f32) -> f32 {
    x
}

pub fn bencher(config: &BenchConfig, name: &str, baseline_ns: f64) -> Bencher {
    Bencher::new(name)
        .with_warmup_rounds(config.warmup_rounds)
        .with_rounds(config.rounds)
        .with_calls_per_round(config.calls_per_round)
        .with_baseline_ns(baseline_ns)
}

pub fn time_kernel<R: RngCore>(
    bencher: Bencher,
    f: fn(f32) -> f32,
    sampler: &mut InputSampler<R>,
) -> Timing {
    let mut sink = 0.0f64;
    let result = bencher.bench(|| {
        let y = f(sampler.next_input());
        sink += y as f64;
        y
    });
    Timing { result, sink }
}

/// Times [`identity`] with no baseline subtracted.
pub fn measure_baseline<R: RngCore>(config: &BenchConfig, sampler: &mut InputSampler<R>) -> Timing {
    time_kernel(bencher(config, "baseline", 0.0), identity, sampler)
}
