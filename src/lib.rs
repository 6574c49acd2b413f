//! # docdom
//!
//! Documentation object model builder: merges reflected assembly metadata
//! with XML documentation comments into one navigable graph of
//! assemblies → namespaces → types → members → parameters.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! dom       → Model builders, SolutionModel graph, diagnostics, FindOptions
//!   ↓
//! docs      → DocCommentSource, XML doc-file reader, doc-comment IDs
//!   ↓
//! metadata  → MetadataSource, reflected type/member shapes, snapshots
//!   ↓
//! base      → Primitives (AssemblyId, TypeId, MethodRef, name helpers)
//! ```

// ============================================================================
// MODULES (dependency order: base → metadata → docs → dom)
// ============================================================================

/// Foundation types: graph IDs, CLR name helpers
pub mod base;

/// Reflected metadata: MetadataSource, types, members, parameters
pub mod metadata;

/// XML documentation: fragments, quick-xml reader, doc-comment IDs
pub mod docs;

/// Documentation object model: builders and the solution graph
pub mod dom;

// Re-export the build entry points
pub use dom::{Diagnostic, DomError, FindOptions, SolutionModel, SolutionModelBuilder};

// Re-export foundation types
pub use base::{AssemblyId, MethodRef, TypeId};
