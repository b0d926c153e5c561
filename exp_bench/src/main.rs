//! Times every exp kernel against `f32::exp` and reports its worst error.
//!
//! Usage: `exp_bench [CONFIG]`, where `CONFIG` is a YAML or JSON file with
//! [`config::BenchConfig`] fields. Build with `--release`.

mod accuracy;
mod config;
mod error;
mod report;
mod runner;
mod sampler;
mod timing;
mod xorshift;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::BenchConfig;

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = BenchConfig::resolve(config_path.as_deref())?;

    let _logger = common::setup_logging(&config.log_level)?;
    if common::is_debug() {
        warn!("exp_bench built without optimizations, timings are meaningless");
    }
    info!(
        "{} rounds x {} calls per kernel, inputs in [-{}, 0], seed {:?}",
        config.rounds, config.calls_per_round, config.input_width, config.seed
    );

    let report = runner::run(&config)?;

    info!("");
    for line in report.summary_lines() {
        info!("{line}");
    }

    if let Some(path) = &config.report_path {
        report
            .save(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
