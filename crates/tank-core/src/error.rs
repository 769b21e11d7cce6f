//! Error types for level catalogue loading and validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read level catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level catalogue: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level catalogue is empty")]
    Empty,
    #[error("level {level:?} is invalid: {reason}")]
    Invalid { level: String, reason: String },
}
