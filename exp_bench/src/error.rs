use common::FileExtensionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Unknown kernel \"{0}\"")]
    UnknownKernel(String),
    #[error("Invalid config value for {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
    #[error(transparent)]
    UnsupportedExtension(#[from] FileExtensionError),
}

pub type HarnessResult<T> = std::result::Result<T, HarnessError>;
