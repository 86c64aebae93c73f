//! Error types for help configuration files.

use thiserror::Error;

/// Errors that can occur while loading or saving a
/// [`HelpConfig`](crate::HelpConfig).
#[derive(Debug, Error)]
pub enum HelpError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`HelpError`].
pub type Result<T> = std::result::Result<T, HelpError>;
