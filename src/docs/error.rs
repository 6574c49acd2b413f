//! Error types for documentation files.

use thiserror::Error;

/// Errors raised while reading one XML documentation file.
#[derive(Debug, Error)]
pub enum DocError {
    /// The file could not be read.
    #[error("cannot read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed or does not follow the doc-file schema.
    #[error("malformed documentation XML in {file} at byte {position}: {message}")]
    Xml {
        file: String,
        position: u64,
        message: String,
    },
}

impl DocError {
    /// Create an XML error.
    pub fn xml(file: impl Into<String>, position: u64, message: impl Into<String>) -> Self {
        Self::Xml {
            file: file.into(),
            position,
            message: message.into(),
        }
    }

    /// Label of the file the error belongs to.
    pub fn file(&self) -> &str {
        match self {
            DocError::Io { file, .. } | DocError::Xml { file, .. } => file,
        }
    }
}
