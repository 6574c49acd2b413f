//! The documentation object model and its builders.
//!
//! ```text
//! SolutionModelBuilder  → per-assembly binding, cross-assembly passes
//!   ↓
//! AssemblyModelBuilder  → type selection, nested linking, namespaces
//!   ↓
//! TypeModelBuilder      → member partition, filters, ordering
//!   ↓
//! build_member          → one member variant, override link
//!   ↓
//! bind_parameters       → <param>/<typeparam> matching
//! ```
//!
//! ## Key Types
//!
//! - [`SolutionModel`] - The finished graph, with ID-based lookups
//! - [`TypeModel`], [`MemberModel`] - Types and their members
//! - [`FindOptions`] - Which undocumented/non-public entities to keep
//! - [`Diagnostic`] - Non-fatal problems found during the build

mod assembly;
mod diagnostics;
mod error;
mod member;
mod model;
mod options;
mod params;
mod solution;
mod type_builder;

pub use assembly::AssemblyModelBuilder;
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use error::DomError;
pub use member::{
    ConstructorModel, EventModel, FieldModel, MemberContext, MemberCore, MemberModel, MemberOwner,
    MethodModel, PropertyModel, SyntheticTypeRef, build_member,
};
pub use model::{
    AssemblyModel, GenericParameterModel, NamespaceModel, ParameterModel, SolutionModel, TypeKind,
    TypeModel,
};
pub use options::{FindOptions, MemberFilter};
pub use params::{bind_generic_parameters, bind_parameters};
pub use solution::SolutionModelBuilder;
pub use type_builder::{TypeModelBuilder, assign_overload_indices};
