use std::path::Path;

use bench::BenchResult;
use exp_kernels::Family;
use serde::Serialize;

use crate::accuracy::ErrorStats;
use crate::config::BenchConfig;

#[derive(Clone, Debug, Serialize)]
pub struct KernelReport {
    pub name: String,
    /// `None` for the reference exponential.
    pub family: Option<String>,
    pub mean_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    pub median_ns: f64,
    pub max_ns: f64,
    pub random: ErrorStats,
    pub exhaustive: Option<ErrorStats>,
    pub documented_bound: Option<f32>,
    /// Reference mean divided by this kernel's mean; `None` when the
    /// kernel's mean is not above the baseline.
    pub speedup: Option<f64>,
}

/// `None` when `kernel_ns` is at or below zero after the baseline was
/// subtracted, i.e. lost in the noise of the harness loop.
pub fn speedup(reference_ns: f64, kernel_ns: f64) -> Option<f64> {
    (kernel_ns > 0.0).then(|| reference_ns / kernel_ns)
}

impl KernelReport {
    pub fn new(
        family: Option<Family>,
        documented_bound: Option<f32>,
        timing: &BenchResult,
        random: ErrorStats,
        exhaustive: Option<ErrorStats>,
    ) -> Self {
        Self {
            name: timing.name.clone(),
            family: family.map(|family| family.to_string()),
            mean_ns: timing.mean_ns,
            std_dev_ns: timing.std_dev_ns,
            min_ns: timing.min_ns,
            median_ns: timing.median_ns,
            max_ns: timing.max_ns,
            random,
            exhaustive,
            documented_bound,
            speedup: None,
        }
    }

    /// The largest error seen by any scan that ran.
    pub fn max_abs_error(&self) -> f64 {
        match self.exhaustive {
            Some(exhaustive) => self.random.merge(exhaustive).max_abs_error,
            None => self.random.max_abs_error,
        }
    }

    pub fn within_bound(&self) -> Option<bool> {
        self.documented_bound
            .map(|bound| self.max_abs_error() <= bound as f64)
    }

    pub fn line(&self) -> String {
        format!(
            "{:.3} +- {:.3} ns per {} number  max err = {:e}",
            self.mean_ns,
            self.std_dev_ns,
            self.name,
            self.max_abs_error()
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    pub rounds: u64,
    pub calls_per_round: u64,
    pub input_width: f32,
    pub seed: Option<u64>,
    pub baseline_ns: f64,
    pub reference: KernelReport,
    pub kernels: Vec<KernelReport>,
}

impl BenchReport {
    pub fn new(
        config: &BenchConfig,
        baseline_ns: f64,
        mut reference: KernelReport,
        mut kernels: Vec<KernelReport>,
    ) -> Self {
        for kernel in &mut kernels {
            kernel.speedup = speedup(reference.mean_ns, kernel.mean_ns);
        }
        reference.speedup = speedup(reference.mean_ns, reference.mean_ns);

        Self {
            rounds: config.rounds,
            calls_per_round: config.calls_per_round,
            input_width: config.input_width,
            seed: config.seed,
            baseline_ns,
            reference,
            kernels,
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{:<24} {:<14} {:>10} {:>8} {:>11} {:>8}  status",
            "kernel", "family", "ns/call", "speedup", "max err", "bound"
        )];

        for kernel in std::iter::once(&self.reference).chain(&self.kernels) {
            let status = match kernel.within_bound() {
                None => "reference",
                Some(true) => match kernel.speedup {
                    None => "ok, below baseline noise",
                    Some(speedup) if speedup > 1.0 => "ok",
                    Some(_) => "ok, slower than reference",
                },
                Some(false) => "EXCEEDS BOUND",
            };
            lines.push(format!(
                "{:<24} {:<14} {:>10.3} {:>8} {:>11.3e} {:>8}  {}",
                kernel.name,
                kernel.family.as_deref().unwrap_or("-"),
                kernel.mean_ns,
                kernel
                    .speedup
                    .map_or_else(|| "-".to_string(), |speedup| format!("{speedup:.2}")),
                kernel.max_abs_error(),
                kernel
                    .documented_bound
                    .map_or_else(|| "-".to_string(), |bound| format!("{bound:.0e}")),
                status
            ));
        }
        lines
    }

    /// Writes YAML or JSON depending on the extension of `path`.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        common::serde::save_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(name: &str, mean_ns: f64) -> BenchResult {
        BenchResult {
            name: name.to_string(),
            rounds: 10,
            calls_per_round: 100,
            mean_ns,
            std_dev_ns: 0.25,
            min_ns: mean_ns - 0.5,
            max_ns: mean_ns + 0.5,
            median_ns: mean_ns,
        }
    }

    fn errors(max_abs_error: f64) -> ErrorStats {
        ErrorStats {
            max_abs_error,
            worst_input: -3.5,
            samples: 1000,
        }
    }

    fn sample_report() -> BenchReport {
        let reference = KernelReport::new(None, None, &timing("f32::exp", 8.0), errors(5e-8), None);
        let kernels = vec![
            KernelReport::new(
                Some(Family::Taylor),
                Some(1e-4),
                &timing("exp_taylor_2", 2.0),
                errors(4e-5),
                None,
            ),
            KernelReport::new(
                Some(Family::BitPattern),
                Some(5e-2),
                &timing("fasterexp", 16.0),
                errors(3e-2),
                Some(errors(6e-2)),
            ),
        ];
        BenchReport::new(&BenchConfig::default(), 1.5, reference, kernels)
    }

    #[test]
    fn speedup_against_reference() {
        let report = sample_report();
        assert_eq!(report.reference.speedup, Some(1.0));
        assert_eq!(report.kernels[0].speedup, Some(4.0));
        assert_eq!(report.kernels[1].speedup, Some(0.5));
    }

    #[test]
    fn kernel_below_baseline_counts_as_faster() {
        let reference = KernelReport::new(None, None, &timing("f32::exp", 3.0), errors(5e-8), None);
        let kernels = [-0.2, 0.0]
            .into_iter()
            .map(|mean_ns| {
                KernelReport::new(
                    Some(Family::Taylor),
                    Some(5e-3),
                    &timing("exp_taylor_4a", mean_ns),
                    errors(3.8e-3),
                    None,
                )
            })
            .collect();
        let report = BenchReport::new(&BenchConfig::default(), 1.5, reference, kernels);

        assert_eq!(report.kernels[0].speedup, None);
        assert_eq!(report.kernels[1].speedup, None);

        let lines = report.summary_lines();
        for line in &lines[2..] {
            assert!(line.ends_with("ok, below baseline noise"), "{line}");
            assert!(!line.contains("slower"), "{line}");
            assert!(!line.contains("inf") && !line.contains("-15"), "{line}");
        }
    }

    #[test]
    fn speedup_of_non_positive_mean_is_none() {
        assert_eq!(speedup(3.0, -0.2), None);
        assert_eq!(speedup(3.0, 0.0), None);
        assert_eq!(speedup(3.0, 1.5), Some(2.0));
    }

    #[test]
    fn exhaustive_error_counts_towards_bound() {
        let report = sample_report();
        assert_eq!(report.reference.within_bound(), None);
        assert_eq!(report.kernels[0].within_bound(), Some(true));
        assert_eq!(report.kernels[1].max_abs_error(), 6e-2);
        assert_eq!(report.kernels[1].within_bound(), Some(false));
    }

    #[test]
    fn line_format() {
        let report = sample_report();
        assert_eq!(
            report.kernels[0].line(),
            "2.000 +- 0.250 ns per exp_taylor_2 number  max err = 4e-5"
        );
    }

    #[test]
    fn summary_has_row_per_kernel() {
        let lines = sample_report().summary_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("kernel"));
        assert!(lines[1].contains("f32::exp") && lines[1].ends_with("reference"));
        assert!(lines[2].contains("taylor") && lines[2].ends_with("ok"));
        assert!(lines[3].ends_with("EXCEEDS BOUND"));
    }

    #[test]
    fn save_yaml_and_json() {
        let dir = std::env::temp_dir().join(format!("exp_bench_report_{}", std::process::id()));
        let report = sample_report();

        for file in ["report.yaml", "nested/report.json"] {
            let path = dir.join(file);
            report.save(&path).unwrap();
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(text.contains("exp_taylor_2"), "{file}: {text}");
            assert!(text.contains("fasterexp"), "{file}: {text}");
        }
        assert!(report.save(&dir.join("report.csv")).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
