//! Diagnostics: non-fatal binding problems.
//!
//! A build never aborts because one assembly or one documentation file is
//! broken. Those problems are recorded here and returned alongside the model.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::docs::DocFragment;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A problem encountered while building the model.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Merging an assembly's metadata with its documentation failed; the
    /// assembly is missing from the model.
    BindingFailure { assembly: SmolStr, error: String },

    /// Documentation entries that match no reflected type or member.
    UnboundEntries {
        assembly: SmolStr,
        unbound_types: Vec<Arc<DocFragment>>,
        unbound_members: Vec<Arc<DocFragment>>,
    },

    /// A documentation file could not be read; its assembly was bound
    /// without documentation. `assembly` is `None` for the namespace file.
    DocFileSkipped {
        assembly: Option<SmolStr>,
        file: String,
        error: String,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::BindingFailure { .. } => Severity::Error,
            Diagnostic::DocFileSkipped { .. } => Severity::Warning,
            Diagnostic::UnboundEntries { .. } => Severity::Info,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::BindingFailure { .. } => codes::BINDING_FAILURE,
            Diagnostic::UnboundEntries { .. } => codes::UNBOUND_ENTRIES,
            Diagnostic::DocFileSkipped { .. } => codes::DOC_FILE_SKIPPED,
        }
    }

    /// The assembly the diagnostic refers to, if any.
    pub fn assembly(&self) -> Option<&str> {
        match self {
            Diagnostic::BindingFailure { assembly, .. }
            | Diagnostic::UnboundEntries { assembly, .. } => Some(assembly.as_str()),
            Diagnostic::DocFileSkipped { assembly, .. } => assembly.as_deref(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BindingFailure { assembly, error } => {
                write!(f, "[{}] assembly {} skipped: {}", self.code(), assembly, error)
            }
            Diagnostic::UnboundEntries {
                assembly,
                unbound_types,
                unbound_members,
            } => write!(
                f,
                "[{}] {}: {} type and {} member doc entries match nothing",
                self.code(),
                assembly,
                unbound_types.len(),
                unbound_members.len()
            ),
            Diagnostic::DocFileSkipped {
                assembly,
                file,
                error,
            } => match assembly {
                Some(assembly) => write!(
                    f,
                    "[{}] {}: documentation file {} skipped: {}",
                    self.code(),
                    assembly,
                    file,
                    error
                ),
                None => write!(
                    f,
                    "[{}] namespace documentation file {} skipped: {}",
                    self.code(),
                    file,
                    error
                ),
            },
        }
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
pub mod codes {
    /// An assembly failed to bind and was left out.
    pub const BINDING_FAILURE: &str = "D0001";
    /// Documentation entries without a reflected counterpart.
    pub const UNBOUND_ENTRIES: &str = "D0002";
    /// A documentation file was unreadable.
    pub const DOC_FILE_SKIPPED: &str = "D0003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a build.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
