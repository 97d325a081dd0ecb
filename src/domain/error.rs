use std::io;

use thiserror::Error;

/// Library-wide error type for processlang operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Program file does not exist.
    #[error("File not found: {0}")]
    ProgramNotFound(String),

    /// A file exists but could not be read as UTF-8 text.
    #[error("Failed to read {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("Failed to write {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub(crate) fn read_failed(path: impl Into<String>, source: io::Error) -> Self {
        AppError::ReadFailed { path: path.into(), source }
    }

    pub(crate) fn write_failed(path: impl Into<String>, source: io::Error) -> Self {
        AppError::WriteFailed { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::ProgramNotFound(_) => io::ErrorKind::NotFound,
            AppError::ReadFailed { source, .. } | AppError::WriteFailed { source, .. } => {
                source.kind()
            }
        }
    }
}
