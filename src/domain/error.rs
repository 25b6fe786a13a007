use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for folio operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Caller-supplied data was rejected.
    #[error("{0}")]
    Validation(String),

    /// Portfolio document could not be serialized.
    #[error("Failed to serialize portfolio document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The stored document exists but cannot be read back.
    #[error("Portfolio document at {} is unreadable: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// Template registration or rendering failed.
    #[error("Template '{template}' failed: {reason}")]
    Template { template: String, reason: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes or statuses.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::Validation(_) => io::ErrorKind::InvalidInput,
            AppError::MalformedDocument { .. } => io::ErrorKind::InvalidData,
            AppError::Serialize(_) | AppError::Template { .. } => io::ErrorKind::Other,
        }
    }
}
