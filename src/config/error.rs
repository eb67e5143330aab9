//! Error types for config loading and flag resolution.

use std::path::PathBuf;

/// Error type for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {}", path.display(), message)]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse {}: {}", path.display(), message)]
    Parse { path: PathBuf, message: String },

    #[error("Invalid entry '{key}' in [tool.rapids_builder]: {reason}")]
    InvalidFlagTable { key: String, reason: String },

    #[error("Invalid value {value:?} for flag '{flag}': expected \"true\" or \"false\"")]
    InvalidFlagValue { flag: &'static str, value: String },
}
