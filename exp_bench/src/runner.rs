use exp_kernels::Family;
use log::{debug, info};
use rand::SeedableRng;

use crate::accuracy::{self, NEGATIVE_DOMAIN_BITS};
use crate::config::BenchConfig;
use crate::report::{BenchReport, KernelReport};
use crate::sampler::InputSampler;
use crate::timing::{self, Timing};
use crate::xorshift::Xorshift128;

pub const REFERENCE_NAME: &str = "f32::exp";

/// A fresh sampler per measurement, so every kernel sees the same inputs.
fn sampler(config: &BenchConfig) -> InputSampler<Xorshift128> {
    let rng = config
        .seed
        .map_or_else(Xorshift128::new, Xorshift128::seed_from_u64);
    InputSampler::new(rng, config.input_width)
}

fn measure(
    config: &BenchConfig,
    name: &str,
    family: Option<Family>,
    bound: Option<f32>,
    f: fn(f32) -> f32,
    baseline_ns: f64,
) -> KernelReport {
    let Timing { result, sink } = timing::time_kernel(
        timing::bencher(config, name, baseline_ns),
        f,
        &mut sampler(config),
    );
    debug!("{name}: sink = {sink}");

    let random = accuracy::random_scan(f, &mut sampler(config), config.accuracy_samples);
    debug!(
        "{name}: max err {:e} at x = {} over {} random inputs",
        random.max_abs_error, random.worst_input, random.samples
    );

    let exhaustive = config.exhaustive.then(|| {
        let stats = accuracy::exhaustive_scan(f, NEGATIVE_DOMAIN_BITS);
        debug!(
            "{name}: max err {:e} at x = {} over all {} inputs in [-16, 0]",
            stats.max_abs_error, stats.worst_input, stats.samples
        );
        stats
    });

    let report = KernelReport::new(family, bound, &result, random, exhaustive);
    info!("{}", report.line());
    report
}

/// Times and scores the reference and every selected kernel, in order.
pub fn run(config: &BenchConfig) -> anyhow::Result<BenchReport> {
    let kernels = config.selected_kernels()?;

    let Timing { result, sink } = timing::measure_baseline(config, &mut sampler(config));
    info!(
        "{:.3} +- {:.3} ns per baseline number",
        result.mean_ns, result.std_dev_ns
    );
    debug!("baseline: sink = {sink}");
    let baseline_ns = result.mean_ns;

    let reference = measure(config, REFERENCE_NAME, None, None, f32::exp, baseline_ns);
    let reports = kernels
        .into_iter()
        .map(|kernel| {
            measure(
                config,
                kernel.name,
                Some(kernel.family),
                Some(kernel.max_abs_error),
                kernel.func,
                baseline_ns,
            )
        })
        .collect();

    Ok(BenchReport::new(config, baseline_ns, reference, reports))
}
