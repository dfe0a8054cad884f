//! Harness-level errors

use emoji_breaks_data::DataError;
use thiserror::Error;

/// Errors that abort corpus setup
///
/// Cloneable so a cached setup failure can be returned from every check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A data file failed header, version or read validation
    #[error(transparent)]
    Data(#[from] DataError),

    /// Invalid harness configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error outside of data file parsing
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for HarnessError {
    fn from(err: std::io::Error) -> Self {
        HarnessError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for HarnessError {
    fn from(err: toml::de::Error) -> Self {
        HarnessError::Config(err.to_string())
    }
}

/// Result type for harness operations
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;
