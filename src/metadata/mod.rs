//! Reflected assembly metadata.
//!
//! The builder never introspects binaries itself. It consumes the output of
//! a [`MetadataSource`]: the declared types of one assembly with their
//! members, parameters, generic parameters and inheritance links.
//!
//! ## Key Types
//!
//! - [`MetadataSource`] - Read-only access to one assembly's types
//! - [`ReflectedType`], [`ReflectedMember`] - Reflected shapes
//! - [`TypeRef`] - Type references appearing in signatures
//! - [`AssemblyMetadata`] - Owned snapshot (JSON-loadable with `interchange`)

mod error;
mod reflected;
mod snapshot;
mod types;

pub use error::MetadataError;
pub use reflected::{
    Accessor, MULTICAST_DELEGATE, OPERATOR_PREFIX, ReflectedGenericParameter, ReflectedMember,
    ReflectedMemberKind, ReflectedParameter, ReflectedType,
};
pub use snapshot::AssemblyMetadata;
pub use types::{TypeFlags, TypeRef, Visibility};

/// Read access to the reflected metadata of one assembly.
///
/// Implementations must be pure reads: the builder may call them from
/// worker threads and may call them more than once.
pub trait MetadataSource: Send + Sync {
    /// Simple name identifying the assembly.
    fn assembly_name(&self) -> &str;

    /// All types declared in the assembly, nested types included.
    fn load_types(&self) -> Result<Vec<ReflectedType>, MetadataError>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for Box<T> {
    fn assembly_name(&self) -> &str {
        (**self).assembly_name()
    }

    fn load_types(&self) -> Result<Vec<ReflectedType>, MetadataError> {
        (**self).load_types()
    }
}

impl<T: MetadataSource + ?Sized> MetadataSource for std::sync::Arc<T> {
    fn assembly_name(&self) -> &str {
        (**self).assembly_name()
    }

    fn load_types(&self) -> Result<Vec<ReflectedType>, MetadataError> {
        (**self).load_types()
    }
}
