use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

pub mod file_format;
pub mod parallel;
pub mod serde;

pub use file_format::{FileExtensionError, SerdeFormat};

pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}

/// Starts the process-wide logger.
///
/// `RUST_LOG` takes precedence over `base_level`. Records go to rotating files
/// under `logs/`, everything is duplicated to stdout and warnings to stderr.
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup_logging(base_level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(base_level)?
        .log_to_file(FileSpec::default().directory("logs"))
        .duplicate_to_stderr(Duplicate::Warn)
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Size(1024 * 1024), //1MB
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    Ok(handle)
}
