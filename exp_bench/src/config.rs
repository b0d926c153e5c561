use std::path::{Path, PathBuf};

use anyhow::Context;
use exp_kernels::{KERNELS, Kernel};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "exp_bench.yaml";

/// Inputs are drawn from `[-input_width, 0]`; wider than the cutoff is pointless.
pub const MAX_INPUT_WIDTH: f32 = 16.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub rounds: u64,
    pub calls_per_round: u64,
    pub warmup_rounds: u64,
    pub accuracy_samples: u64,
    pub input_width: f32,
    pub seed: Option<u64>,
    /// Kernel names to run; empty runs all of them.
    pub kernels: Vec<String>,
    pub exhaustive: bool,
    pub report_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            calls_per_round: 1_000_000,
            warmup_rounds: 1,
            accuracy_samples: 10_000_000,
            input_width: 10.0,
            seed: None,
            kernels: Vec::new(),
            exhaustive: false,
            report_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl BenchConfig {
    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// otherwise the defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_PATH))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: Self = common::serde::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> HarnessResult<()> {
        let positive = [
            ("rounds", self.rounds),
            ("calls_per_round", self.calls_per_round),
            ("accuracy_samples", self.accuracy_samples),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(HarnessError::InvalidConfig {
                    field,
                    message: "must be > 0".to_string(),
                });
            }
        }

        if !(self.input_width > 0.0 && self.input_width <= MAX_INPUT_WIDTH) {
            return Err(HarnessError::InvalidConfig {
                field: "input_width",
                message: format!("{} is not in (0, {MAX_INPUT_WIDTH}]", self.input_width),
            });
        }

        if let Some(path) = &self.report_path {
            common::SerdeFormat::from_path(path)?;
        }

        self.selected_kernels().map(|_| ())
    }

    /// Kernels to run, in registry order when none are named and in the
    /// configured order otherwise.
    pub fn selected_kernels(&self) -> HarnessResult<Vec<&'static Kernel>> {
        if self.kernels.is_empty() {
            return Ok(KERNELS.iter().collect());
        }

        self.kernels
            .iter()
            .map(|name| {
                exp_kernels::find(name).ok_or_else(|| HarnessError::UnknownKernel(name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SerdeFormat;

    #[test]
    fn defaults_are_valid() {
        let config = BenchConfig::default();
        config.validate().unwrap();
        assert_eq!(config.selected_kernels().unwrap().len(), KERNELS.len());
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = "rounds: 5\nkernels: [fastexp, exp_taylor_3]\nseed: 7\n";
        let config: BenchConfig = common::serde::deserialize(yaml.as_bytes(), SerdeFormat::Yaml).unwrap();

        assert_eq!(config.rounds, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.calls_per_round, 1_000_000);
        assert_eq!(config.input_width, 10.0);

        let names: Vec<_> = config
            .selected_kernels()
            .unwrap()
            .iter()
            .map(|k| k.name)
            .collect();
        assert_eq!(names, ["fastexp", "exp_taylor_3"]);
    }

    #[test]
    fn rejects_zero_counts() {
        let config = BenchConfig {
            calls_per_round: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            HarnessError::InvalidConfig {
                field: "calls_per_round",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_width() {
        for width in [0.0, -1.0, 16.5, f32::NAN, f32::INFINITY] {
            let config = BenchConfig {
                input_width: width,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "width {width}");
        }
        let config = BenchConfig {
            input_width: 16.0,
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn rejects_unknown_kernel() {
        let config = BenchConfig {
            kernels: vec!["exp_taylor_2".to_string(), "exp_magic".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Unknown kernel \"exp_magic\"");
    }

    #[test]
    fn rejects_unsupported_report_extension() {
        let config = BenchConfig {
            report_path: Some(PathBuf::from("report.txt")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HarnessError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn load_reports_invalid_values() {
        let dir = std::env::temp_dir().join(format!("exp_bench_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{ "rounds": 3, "exhaustive": true }"#).unwrap();
        let config = BenchConfig::load(&good).unwrap();
        assert_eq!(config.rounds, 3);
        assert!(config.exhaustive);

        let bad = dir.join("bad.yaml");
        std::fs::write(&bad, "input_width: 100.0\n").unwrap();
        let err = BenchConfig::load(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("input_width"), "{err:#}");

        assert!(BenchConfig::load(&dir.join("missing.yaml")).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn resolve_uses_explicit_path() {
        let dir = std::env::temp_dir().join(format!("exp_bench_resolve_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.yml");
        std::fs::write(&path, "warmup_rounds: 0\n").unwrap();

        let config = BenchConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.warmup_rounds, 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
