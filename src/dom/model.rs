//! The documentation graph.
//!
//! ```text
//! SolutionModel
//!   ├── AssemblyModel[]      (owns TypeModel[] flat, nested types included)
//!   │     └── TypeModel      (owns its members)
//!   ├── NamespaceModel[]     (merged across assemblies, holds TypeIds)
//!   └── Diagnostic[]
//! ```
//!
//! Ownership only points down. Everything pointing up or sideways
//! (declaring type, nested types, namespace contents, extension methods) is an
//! ID resolved through [`SolutionModel`].

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::diagnostics::Diagnostic;
use super::member::MemberModel;
use crate::base::{AssemblyId, MethodRef, TypeId};
use crate::docs::{DocFragment, DocParam};
use crate::metadata::{MULTICAST_DELEGATE, ReflectedType, TypeFlags, TypeRef, Visibility};

// ============================================================================
// PARAMETERS
// ============================================================================

/// A parameter of a constructor, method, or indexer.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterModel {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub is_optional: bool,
    pub doc: Option<DocParam>,
}

/// A generic parameter of a type or method.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericParameterModel {
    pub name: SmolStr,
    pub position: u32,
    pub doc: Option<DocParam>,
}

// ============================================================================
// TYPES
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Delegate,
    Enum,
}

impl TypeKind {
    /// Derive the kind of a reflected type.
    ///
    /// Delegates are recognized by their base type; the rest come from flags.
    pub fn classify(ty: &ReflectedType) -> TypeKind {
        let is_delegate = ty
            .base_type
            .as_ref()
            .and_then(TypeRef::definition_name)
            .is_some_and(|base| base == MULTICAST_DELEGATE);
        if is_delegate {
            TypeKind::Delegate
        } else if ty.flags.is_interface {
            TypeKind::Interface
        } else if ty.flags.is_enum {
            TypeKind::Enum
        } else if ty.flags.is_value_type {
            TypeKind::Struct
        } else {
            TypeKind::Class
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Delegate => "delegate",
            TypeKind::Enum => "enum",
        }
    }
}

/// One class, struct, interface, delegate or enum.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeModel {
    pub id: TypeId,
    /// Runtime full name: `` Acme.Outer+Inner`1 ``.
    pub full_name: SmolStr,
    pub namespace: SmolStr,
    /// Display name: no namespace, nesting path, or arity marker.
    pub name: SmolStr,
    pub doc_id: String,
    pub kind: TypeKind,
    pub visibility: Visibility,
    pub flags: TypeFlags,
    pub base_type: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub declaring_type: Option<TypeId>,
    pub nested_types: Vec<TypeId>,
    pub generic_parameters: Vec<GenericParameterModel>,
    pub doc: Option<Arc<DocFragment>>,

    pub constructors: Vec<MemberModel>,
    pub fields: Vec<MemberModel>,
    pub properties: Vec<MemberModel>,
    /// Methods other than operators.
    pub methods: Vec<MemberModel>,
    pub operators: Vec<MemberModel>,
    pub events: Vec<MemberModel>,
    /// Extension methods anywhere in the solution whose first parameter is
    /// this type. Filled in by the solution pass.
    pub extension_methods: Vec<MethodRef>,
}

impl TypeModel {
    pub fn assembly(&self) -> AssemblyId {
        self.id.assembly
    }

    pub fn is_nested(&self) -> bool {
        self.declaring_type.is_some()
    }

    /// All members, collection by collection.
    pub fn members(&self) -> impl Iterator<Item = &MemberModel> {
        self.constructors
            .iter()
            .chain(&self.fields)
            .chain(&self.properties)
            .chain(&self.methods)
            .chain(&self.operators)
            .chain(&self.events)
    }

    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut MemberModel> {
        self.constructors
            .iter_mut()
            .chain(&mut self.fields)
            .chain(&mut self.properties)
            .chain(&mut self.methods)
            .chain(&mut self.operators)
            .chain(&mut self.events)
    }

    pub fn member_count(&self) -> usize {
        self.constructors.len()
            + self.fields.len()
            + self.properties.len()
            + self.methods.len()
            + self.operators.len()
            + self.events.len()
    }

    /// `Name<T, U>` for generic types, `Name` otherwise.
    pub fn display_name(&self) -> String {
        if self.generic_parameters.is_empty() {
            self.name.to_string()
        } else {
            let params: Vec<&str> = self.generic_parameters.iter().map(|p| p.name.as_str()).collect();
            format!("{}<{}>", self.name, params.join(", "))
        }
    }
}

// ============================================================================
// NAMESPACES AND ASSEMBLIES
// ============================================================================

/// A namespace and its top-level types, ordered by simple name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamespaceModel {
    /// Empty for the global namespace.
    pub name: SmolStr,
    pub types: Vec<TypeId>,
    pub doc: Option<Arc<DocFragment>>,
}

impl NamespaceModel {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            doc: None,
        }
    }
}

/// One bound assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct AssemblyModel {
    pub id: AssemblyId,
    pub name: SmolStr,
    /// Flat type arena, indexed by [`TypeId::slot`].
    pub types: Vec<TypeModel>,
    /// Namespaces of this assembly alone, sorted by name.
    pub namespaces: Vec<NamespaceModel>,
    /// Unbound documentation entries of this assembly.
    pub diagnostics: Vec<Diagnostic>,
}

impl AssemblyModel {
    pub fn type_model(&self, id: TypeId) -> Option<&TypeModel> {
        if id.assembly != self.id {
            return None;
        }
        self.types.get(id.slot())
    }

    pub fn find_type(&self, full_name: &str) -> Option<&TypeModel> {
        self.types.iter().find(|t| t.full_name == full_name)
    }
}

// ============================================================================
// SOLUTION
// ============================================================================

/// The merged documentation graph of every assembly in one build.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionModel {
    /// Bound assemblies in input order. Failed ones are absent.
    pub(super) assemblies: Vec<AssemblyModel>,
    pub(super) namespaces: Vec<NamespaceModel>,
    pub(super) types: Vec<TypeId>,
    pub(super) type_index: FxHashMap<SmolStr, TypeId>,
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl SolutionModel {
    pub fn assemblies(&self) -> &[AssemblyModel] {
        &self.assemblies
    }

    pub fn assembly(&self, id: AssemblyId) -> Option<&AssemblyModel> {
        self.assemblies
            .binary_search_by_key(&id, |a| a.id)
            .ok()
            .map(|pos| &self.assemblies[pos])
    }

    pub fn assembly_named(&self, name: &str) -> Option<&AssemblyModel> {
        self.assemblies.iter().find(|a| a.name == name)
    }

    /// Namespaces merged across assemblies, sorted by name.
    pub fn namespaces(&self) -> &[NamespaceModel] {
        &self.namespaces
    }

    pub fn namespace(&self, name: &str) -> Option<&NamespaceModel> {
        self.namespaces
            .binary_search_by(|ns| ns.name.as_str().cmp(name))
            .ok()
            .map(|pos| &self.namespaces[pos])
    }

    /// Every type of every assembly, nested types included.
    pub fn types(&self) -> impl Iterator<Item = &TypeModel> {
        self.types.iter().filter_map(|id| self.type_model(*id))
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn type_model(&self, id: TypeId) -> Option<&TypeModel> {
        self.assembly(id.assembly)?.types.get(id.slot())
    }

    /// Look a type up by runtime full name. When two assemblies declare the
    /// same name, the earlier assembly wins.
    pub fn find_type(&self, full_name: &str) -> Option<&TypeModel> {
        self.type_model(*self.type_index.get(full_name)?)
    }

    pub fn method(&self, method: MethodRef) -> Option<&MemberModel> {
        self.type_model(method.owner)?
            .methods
            .get(method.index as usize)
    }

    /// Extension methods attached to a type.
    pub fn extension_methods(&self, ty: TypeId) -> impl Iterator<Item = &MemberModel> {
        self.type_model(ty)
            .into_iter()
            .flat_map(|t| t.extension_methods.iter())
            .filter_map(|m| self.method(*m))
    }

    /// Types of a namespace, in order.
    pub fn namespace_types<'a>(
        &'a self,
        namespace: &'a NamespaceModel,
    ) -> impl Iterator<Item = &'a TypeModel> + 'a {
        namespace.types.iter().filter_map(|id| self.type_model(*id))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
