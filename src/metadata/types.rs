//! Reflected type references, visibility, and type flags.

use smol_str::SmolStr;

use crate::base::names;

// ============================================================================
// VISIBILITY
// ============================================================================

/// Declared accessibility of a reflected type, member, or accessor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "camelCase"))]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    /// Visible to derived types or to the declaring assembly.
    ProtectedInternal,
    Internal,
    /// Visible only to derived types inside the declaring assembly.
    PrivateProtected,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }

    /// True when the entity cannot be reached from outside its assembly.
    pub fn is_private_or_internal(self) -> bool {
        matches!(
            self,
            Visibility::Private | Visibility::Internal | Visibility::PrivateProtected
        )
    }

    /// The more visible of two accessibilities.
    pub fn widest(self, other: Visibility) -> Visibility {
        if self.rank() <= other.rank() { self } else { other }
    }

    fn rank(self) -> u8 {
        match self {
            Visibility::Public => 0,
            Visibility::ProtectedInternal => 1,
            Visibility::Protected => 2,
            Visibility::Internal => 3,
            Visibility::PrivateProtected => 4,
            Visibility::Private => 5,
        }
    }
}

// ============================================================================
// TYPE FLAGS
// ============================================================================

/// Structural flags reported by reflection for a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default, rename_all = "camelCase"))]
pub struct TypeFlags {
    pub is_interface: bool,
    pub is_enum: bool,
    pub is_value_type: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
}

impl TypeFlags {
    pub const CLASS: Self = Self {
        is_interface: false,
        is_enum: false,
        is_value_type: false,
        is_abstract: false,
        is_sealed: false,
    };

    pub const STRUCT: Self = Self {
        is_value_type: true,
        is_sealed: true,
        ..Self::CLASS
    };

    pub const INTERFACE: Self = Self {
        is_interface: true,
        is_abstract: true,
        ..Self::CLASS
    };

    pub const ENUM: Self = Self {
        is_enum: true,
        is_value_type: true,
        is_sealed: true,
        ..Self::CLASS
    };

    pub const STATIC_CLASS: Self = Self {
        is_abstract: true,
        is_sealed: true,
        ..Self::CLASS
    };
}

// ============================================================================
// TYPE REFERENCES
// ============================================================================

/// Reference to a type as it appears in a signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "interchange",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum TypeRef {
    /// A named type, optionally instantiated with generic arguments.
    ///
    /// `full_name` is the generic definition name (`` System.Collections.Generic.List`1 ``).
    Named {
        full_name: SmolStr,
        #[cfg_attr(feature = "interchange", serde(default))]
        args: Vec<TypeRef>,
    },
    /// A generic parameter of the enclosing type.
    GenericTypeParam { position: u32, name: SmolStr },
    /// A generic parameter of the enclosing method.
    GenericMethodParam { position: u32, name: SmolStr },
    Array { element: Box<TypeRef>, rank: u32 },
    ByRef { target: Box<TypeRef> },
    Pointer { target: Box<TypeRef> },
}

impl TypeRef {
    pub fn named(full_name: impl Into<SmolStr>) -> Self {
        TypeRef::Named {
            full_name: full_name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(full_name: impl Into<SmolStr>, args: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            full_name: full_name.into(),
            args,
        }
    }

    pub fn type_param(position: u32, name: impl Into<SmolStr>) -> Self {
        TypeRef::GenericTypeParam {
            position,
            name: name.into(),
        }
    }

    pub fn method_param(position: u32, name: impl Into<SmolStr>) -> Self {
        TypeRef::GenericMethodParam {
            position,
            name: name.into(),
        }
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    pub fn by_ref(target: TypeRef) -> Self {
        TypeRef::ByRef {
            target: Box::new(target),
        }
    }

    pub fn void() -> Self {
        Self::named("System.Void")
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Named { full_name, .. } if full_name == "System.Void")
    }

    /// Full name of the type definition this reference resolves to, if any.
    ///
    /// By-ref wrappers are transparent; arrays, pointers and generic
    /// parameters do not name a definition.
    pub fn definition_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named { full_name, .. } => Some(full_name.as_str()),
            TypeRef::ByRef { target } => target.definition_name(),
            _ => None,
        }
    }

    /// Short human-readable rendering: `List<String>`, `Int32[]`, `ref T`.
    pub fn display_name(&self) -> String {
        match self {
            TypeRef::Named { full_name, args } => {
                let base = names::display_name(full_name);
                if args.is_empty() {
                    base.to_string()
                } else {
                    let args: Vec<_> = args.iter().map(TypeRef::display_name).collect();
                    format!("{}<{}>", base, args.join(", "))
                }
            }
            TypeRef::GenericTypeParam { name, .. } | TypeRef::GenericMethodParam { name, .. } => {
                name.to_string()
            }
            TypeRef::Array { element, rank } => {
                let commas = ",".repeat(rank.saturating_sub(1) as usize);
                format!("{}[{}]", element.display_name(), commas)
            }
            TypeRef::ByRef { target } => format!("ref {}", target.display_name()),
            TypeRef::Pointer { target } => format!("{}*", target.display_name()),
        }
    }
}
