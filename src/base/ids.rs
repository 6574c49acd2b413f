//! Graph identifiers.
//!
//! Ownership in the model is strictly one-directional (solution owns
//! assemblies, assemblies own types, types own members). Every reference that
//! points back up the tree, or sideways across it, is one of these IDs.

use std::fmt;

/// Position of an assembly in the solution input list.
///
/// IDs are assigned before binding, so an assembly that fails to bind leaves a
/// gap rather than shifting the IDs of the assemblies after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyId(pub u32);

impl AssemblyId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AssemblyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asm#{}", self.0)
    }
}

/// A type inside an assembly's flat type arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId {
    pub assembly: AssemblyId,
    pub index: u32,
}

impl TypeId {
    pub fn new(assembly: AssemblyId, index: usize) -> Self {
        Self {
            assembly,
            index: index as u32,
        }
    }

    /// Index into [`AssemblyModel::types`](crate::dom::AssemblyModel::types).
    pub fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/type#{}", self.assembly, self.index)
    }
}

/// A method inside the `methods` collection of its owning type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub owner: TypeId,
    pub index: u32,
}

impl MethodRef {
    pub fn new(owner: TypeId, index: usize) -> Self {
        Self {
            owner,
            index: index as u32,
        }
    }
}
