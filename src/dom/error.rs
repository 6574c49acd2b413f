//! Error types for model building.

use thiserror::Error;

use crate::metadata::MetadataError;

/// Errors raised by the model builders.
///
/// Only [`DomError::InvalidArgument`] ever escapes a solution build; every
/// other variant is caught at the assembly boundary and turned into a
/// [`Diagnostic`](super::Diagnostic). Documentation files that fail to load
/// never become a `DomError`; they are skipped with their own diagnostic.
#[derive(Debug, Error)]
pub enum DomError {
    /// The caller violated the input contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reflected metadata could not be read or is inconsistent.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Binding code panicked while processing one assembly.
    #[error("binding panicked: {0}")]
    Panicked(String),
}

impl DomError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
