//! Error types for metadata loading.

use thiserror::Error;

/// Errors raised while reading reflected metadata for one assembly.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// IO error while reading a metadata snapshot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON snapshot could not be decoded.
    #[cfg(feature = "interchange")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Metadata is structurally inconsistent.
    #[error("Malformed metadata in {assembly}: {message}")]
    Malformed { assembly: String, message: String },
}

impl MetadataError {
    /// Create a malformed-metadata error.
    pub fn malformed(assembly: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            assembly: assembly.into(),
            message: message.into(),
        }
    }
}
