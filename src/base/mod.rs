//! Foundation types for the documentation model.
//!
//! This module provides the identifiers and name helpers used throughout the
//! builder:
//! - [`AssemblyId`], [`TypeId`], [`MethodRef`] - Non-owning back-references into the graph
//! - [`names`] - CLR name manipulation (generic arity markers, nesting separators)
//!
//! This module has NO dependencies on other docdom modules.

mod ids;
pub mod names;

pub use ids::{AssemblyId, MethodRef, TypeId};
