//! Simple per-call benchmarking utilities.
//!
//! A [`Bencher`] times a closure in rounds: every round invokes the closure
//! `calls_per_round` times and records the average cost of a single call.
//! Statistics are reported per call, in nanoseconds, optionally with the cost
//! of an empty harness loop (the baseline) subtracted.

use std::hint::black_box;
use std::time::Instant;

pub use bench_macros::quick_bench;

/// A bencher for measuring the per-call cost of a cheap function.
#[derive(Clone, Debug)]
pub struct Bencher {
    name: String,
    warmup_rounds: u64,
    rounds: u64,
    calls_per_round: u64,
    baseline_ns: f64,
}

/// Per-call statistics from a benchmark run, in nanoseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchResult {
    pub name: String,
    pub rounds: u64,
    pub calls_per_round: u64,
    pub mean_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    pub median_ns: f64,
}

impl std::fmt::Display for BenchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[BENCH] {}: {:.3} +- {:.3} ns per call (min: {:.3}, max: {:.3}, median: {:.3}, {} x {} calls)",
            self.name,
            self.mean_ns,
            self.std_dev_ns,
            self.min_ns,
            self.max_ns,
            self.median_ns,
            self.rounds,
            self.calls_per_round
        )
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self {
            name: String::new(),
            warmup_rounds: 1,
            rounds: 100,
            calls_per_round: 1_000_000,
            baseline_ns: 0.0,
        }
    }
}

impl Bencher {
    /// Create a new bencher with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the number of untimed rounds run before measuring.
    #[must_use]
    pub fn with_warmup_rounds(mut self, rounds: u64) -> Self {
        self.warmup_rounds = rounds;
        self
    }

    /// Set the number of timed rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set how many times the closure is invoked per round.
    #[must_use]
    pub fn with_calls_per_round(mut self, calls: u64) -> Self {
        self.calls_per_round = calls;
        self
    }

    /// Set the per-call cost (ns) subtracted from every round, usually the
    /// mean of a run of an empty closure under identical conditions.
    #[must_use]
    pub fn with_baseline_ns(mut self, baseline_ns: f64) -> Self {
        self.baseline_ns = baseline_ns;
        self
    }

    /// Run a labeled benchmark variant without consuming self.
    ///
    /// This allows running multiple benchmark variants in a single test function:
    /// ```ignore
    /// b.bench_labeled("taylor", || exp_taylor_2(x));
    /// b.bench_labeled("libm", || x.exp());
    /// ```
    pub fn bench_labeled<F, R>(&self, label: &str, f: F) -> BenchResult
    where
        F: FnMut() -> R,
    {
        let bencher = Bencher {
            name: format!("{}/{}", self.name, label),
            ..self.clone()
        };
        let result = bencher.bench(f);
        println!("\n{result}");
        result
    }

    /// Run the benchmark.
    ///
    /// Every call result goes through [`black_box`], so the compiler can neither
    /// drop the call nor hoist it out of the loop.
    ///
    /// # Panics
    ///
    /// Panics if `rounds` or `calls_per_round` is 0.
    pub fn bench<F, R>(self, mut f: F) -> BenchResult
    where
        F: FnMut() -> R,
    {
        assert!(self.rounds > 0, "rounds must be > 0");
        assert!(self.calls_per_round > 0, "calls_per_round must be > 0");

        #[cfg(debug_assertions)]
        log::warn!(
            "{}: DEBUG MODE - benchmarks should be run with --release",
            self.name
        );

        for _ in 0..self.warmup_rounds {
            for _ in 0..self.calls_per_round {
                black_box(f());
            }
        }

        let mut per_call = Vec::with_capacity(self.rounds as usize);
        for _ in 0..self.rounds {
            let start = Instant::now();
            for _ in 0..self.calls_per_round {
                black_box(f());
            }
            let elapsed = start.elapsed().as_nanos() as f64;
            per_call.push(elapsed / self.calls_per_round as f64 - self.baseline_ns);
        }

        self.compute_result(per_call)
    }

    fn compute_result(self, mut per_call: Vec<f64>) -> BenchResult {
        let stats = Stats::from_samples(&mut per_call);

        BenchResult {
            name: self.name,
            rounds: self.rounds,
            calls_per_round: self.calls_per_round,
            mean_ns: stats.mean,
            std_dev_ns: stats.std_dev,
            min_ns: stats.min,
            max_ns: stats.max,
            median_ns: stats.median,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Stats {
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    median: f64,
}

impl Stats {
    /// Mean and population standard deviation (`sqrt(E[t²] - mean²)`) plus
    /// order statistics. Sorts `samples` in place.
    fn from_samples(samples: &mut [f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        samples.sort_by(f64::total_cmp);

        let n = samples.len() as f64;
        let sum: f64 = samples.iter().sum();
        let sum_square: f64 = samples.iter().map(|t| t * t).sum();
        let mean = sum / n;
        // E[t²] - mean² cancels catastrophically for near-constant samples;
        // anything within the rounding noise of mean² is zero.
        let variance = sum_square / n - mean * mean;
        let noise = mean * mean * n * f64::EPSILON;
        let variance = if variance <= noise { 0.0 } else { variance };

        Self {
            mean,
            std_dev: variance.sqrt(),
            min: samples[0],
            max: samples[samples.len() - 1],
            median: samples[samples.len() / 2],
        }
    }
}
