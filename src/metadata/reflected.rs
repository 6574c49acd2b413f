//! Reflected type and member shapes.
//!
//! These mirror what runtime introspection of an assembly reports. They are
//! plain data: the builder only reads them.

use smol_str::SmolStr;

use super::types::{TypeFlags, TypeRef, Visibility};
use crate::base::names;

/// Full name of the runtime root that every delegate type derives from.
pub const MULTICAST_DELEGATE: &str = "System.MulticastDelegate";

/// Reflected name prefix of user-defined operators.
pub const OPERATOR_PREFIX: &str = "op_";

// ============================================================================
// TYPES
// ============================================================================

/// One type declared in an assembly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "camelCase"))]
pub struct ReflectedType {
    /// Runtime full name: `` Acme.Outer+Inner`1 ``.
    pub full_name: SmolStr,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub visibility: Visibility,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub flags: TypeFlags,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub base_type: Option<TypeRef>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub interfaces: Vec<TypeRef>,
    /// Full name of the declaring type for nested types.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub declaring_type: Option<SmolStr>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub generic_parameters: Vec<ReflectedGenericParameter>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<ReflectedMember>,
}

impl ReflectedType {
    pub fn new(full_name: impl Into<SmolStr>, flags: TypeFlags) -> Self {
        Self {
            full_name: full_name.into(),
            visibility: Visibility::Public,
            flags,
            base_type: None,
            interfaces: Vec::new(),
            declaring_type: None,
            generic_parameters: Vec::new(),
            members: Vec::new(),
        }
    }

    /// A public class deriving from `System.Object`.
    pub fn class(full_name: impl Into<SmolStr>) -> Self {
        Self::new(full_name, TypeFlags::CLASS).with_base(TypeRef::named("System.Object"))
    }

    /// Namespace of the outermost declaring type (empty for the global namespace).
    pub fn namespace(&self) -> &str {
        names::split_namespace(&self.full_name).0
    }

    /// Name without namespace, nesting path, or arity marker.
    pub fn name(&self) -> &str {
        names::display_name(&self.full_name)
    }

    pub fn is_nested(&self) -> bool {
        self.declaring_type.is_some()
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn nested_in(mut self, declaring_type: impl Into<SmolStr>) -> Self {
        self.declaring_type = Some(declaring_type.into());
        self
    }

    pub fn with_generic_parameter(mut self, name: impl Into<SmolStr>) -> Self {
        let position = self.generic_parameters.len() as u32;
        self.generic_parameters
            .push(ReflectedGenericParameter::new(position, name));
        self
    }

    pub fn with_member(mut self, member: ReflectedMember) -> Self {
        self.members.push(member);
        self
    }
}

/// A generic parameter declared by a type or method.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflectedGenericParameter {
    pub position: u32,
    pub name: SmolStr,
}

impl ReflectedGenericParameter {
    pub fn new(position: u32, name: impl Into<SmolStr>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// A parameter of a method, constructor, or indexer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "camelCase"))]
pub struct ReflectedParameter {
    pub name: SmolStr,
    pub ty: TypeRef,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub is_optional: bool,
}

impl ReflectedParameter {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_optional: false,
        }
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

/// One accessor (`get`/`set`/`add`/`remove`) of a property or event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default, rename_all = "camelCase"))]
pub struct Accessor {
    pub visibility: Visibility,
    pub is_static: bool,
}

impl Accessor {
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: false,
        }
    }
}

/// One member as reflection reports it on a type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "camelCase"))]
pub struct ReflectedMember {
    pub name: SmolStr,
    /// Full name of the type that declares the member. Differs from the
    /// reflected type when the member is inherited.
    pub declaring_type: SmolStr,
    /// Most-base declaration of a virtual member, if reflection reports one.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub base_definition: Option<Box<ReflectedMember>>,
    #[cfg_attr(feature = "interchange", serde(flatten))]
    pub kind: ReflectedMemberKind,
}

/// Kind-specific shape of a reflected member.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "interchange",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum ReflectedMemberKind {
    Constructor {
        visibility: Visibility,
        is_static: bool,
        parameters: Vec<ReflectedParameter>,
    },
    Method {
        visibility: Visibility,
        is_static: bool,
        is_virtual: bool,
        is_abstract: bool,
        /// Set for compiler-generated names: operators and accessors.
        is_special_name: bool,
        /// Carries the extension-method marker attribute.
        is_extension: bool,
        return_type: TypeRef,
        parameters: Vec<ReflectedParameter>,
        generic_parameters: Vec<ReflectedGenericParameter>,
    },
    Property {
        getter: Option<Accessor>,
        setter: Option<Accessor>,
        property_type: TypeRef,
        index_parameters: Vec<ReflectedParameter>,
    },
    Field {
        visibility: Visibility,
        is_static: bool,
        is_literal: bool,
        field_type: TypeRef,
    },
    Event {
        add: Accessor,
        remove: Accessor,
        handler_type: TypeRef,
    },
}

impl ReflectedMember {
    fn new(declaring_type: impl Into<SmolStr>, name: impl Into<SmolStr>, kind: ReflectedMemberKind) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            base_definition: None,
            kind,
        }
    }

    pub fn constructor(declaring_type: impl Into<SmolStr>) -> Self {
        Self::new(
            declaring_type,
            ".ctor",
            ReflectedMemberKind::Constructor {
                visibility: Visibility::Public,
                is_static: false,
                parameters: Vec::new(),
            },
        )
    }

    pub fn method(declaring_type: impl Into<SmolStr>, name: impl Into<SmolStr>, return_type: TypeRef) -> Self {
        Self::new(
            declaring_type,
            name,
            ReflectedMemberKind::Method {
                visibility: Visibility::Public,
                is_static: false,
                is_virtual: false,
                is_abstract: false,
                is_special_name: false,
                is_extension: false,
                return_type,
                parameters: Vec::new(),
                generic_parameters: Vec::new(),
            },
        )
    }

    /// A user-defined operator (`op_Addition`, `op_Implicit`, ...).
    pub fn operator(declaring_type: impl Into<SmolStr>, name: impl Into<SmolStr>, return_type: TypeRef) -> Self {
        let mut member = Self::method(declaring_type, name, return_type).as_static();
        if let ReflectedMemberKind::Method {
            is_special_name, ..
        } = &mut member.kind
        {
            *is_special_name = true;
        }
        member
    }

    pub fn property(declaring_type: impl Into<SmolStr>, name: impl Into<SmolStr>, property_type: TypeRef) -> Self {
        Self::new(
            declaring_type,
            name,
            ReflectedMemberKind::Property {
                getter: Some(Accessor::new(Visibility::Public)),
                setter: None,
                property_type,
                index_parameters: Vec::new(),
            },
        )
    }

    pub fn field(declaring_type: impl Into<SmolStr>, name: impl Into<SmolStr>, field_type: TypeRef) -> Self {
        Self::new(
            declaring_type,
            name,
            ReflectedMemberKind::Field {
                visibility: Visibility::Public,
                is_static: false,
                is_literal: false,
                field_type,
            },
        )
    }

    pub fn event(declaring_type: impl Into<SmolStr>, name: impl Into<SmolStr>, handler_type: TypeRef) -> Self {
        Self::new(
            declaring_type,
            name,
            ReflectedMemberKind::Event {
                add: Accessor::new(Visibility::Public),
                remove: Accessor::new(Visibility::Public),
                handler_type,
            },
        )
    }

    /// Set the visibility of the member, or of every accessor for
    /// properties and events.
    pub fn with_visibility(mut self, new: Visibility) -> Self {
        match &mut self.kind {
            ReflectedMemberKind::Constructor { visibility, .. }
            | ReflectedMemberKind::Method { visibility, .. }
            | ReflectedMemberKind::Field { visibility, .. } => *visibility = new,
            ReflectedMemberKind::Property { getter, setter, .. } => {
                for accessor in [getter, setter].into_iter().flatten() {
                    accessor.visibility = new;
                }
            }
            ReflectedMemberKind::Event { add, remove, .. } => {
                add.visibility = new;
                remove.visibility = new;
            }
        }
        self
    }

    pub fn as_static(mut self) -> Self {
        match &mut self.kind {
            ReflectedMemberKind::Constructor { is_static, .. }
            | ReflectedMemberKind::Method { is_static, .. }
            | ReflectedMemberKind::Field { is_static, .. } => *is_static = true,
            ReflectedMemberKind::Property { getter, setter, .. } => {
                for accessor in [getter, setter].into_iter().flatten() {
                    accessor.is_static = true;
                }
            }
            ReflectedMemberKind::Event { add, remove, .. } => {
                add.is_static = true;
                remove.is_static = true;
            }
        }
        if let ReflectedMemberKind::Constructor { .. } = self.kind {
            self.name = ".cctor".into();
        }
        self
    }

    /// Mark a static method as an extension method.
    pub fn as_extension(mut self) -> Self {
        if let ReflectedMemberKind::Method {
            is_extension,
            is_static,
            ..
        } = &mut self.kind
        {
            *is_extension = true;
            *is_static = true;
        }
        self
    }

    pub fn as_virtual(mut self) -> Self {
        if let ReflectedMemberKind::Method { is_virtual, .. } = &mut self.kind {
            *is_virtual = true;
        }
        self
    }

    pub fn with_setter(mut self, accessor: Accessor) -> Self {
        if let ReflectedMemberKind::Property { setter, .. } = &mut self.kind {
            *setter = Some(accessor);
        }
        self
    }

    pub fn with_getter(mut self, accessor: Option<Accessor>) -> Self {
        if let ReflectedMemberKind::Property { getter, .. } = &mut self.kind {
            *getter = accessor;
        }
        self
    }

    /// Append a parameter (index parameter for properties).
    pub fn with_parameter(mut self, name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        let param = ReflectedParameter::new(name, ty);
        match &mut self.kind {
            ReflectedMemberKind::Constructor { parameters, .. }
            | ReflectedMemberKind::Method { parameters, .. } => parameters.push(param),
            ReflectedMemberKind::Property {
                index_parameters, ..
            } => index_parameters.push(param),
            ReflectedMemberKind::Field { .. } | ReflectedMemberKind::Event { .. } => {}
        }
        self
    }

    pub fn with_generic_parameter(mut self, name: impl Into<SmolStr>) -> Self {
        if let ReflectedMemberKind::Method {
            generic_parameters, ..
        } = &mut self.kind
        {
            let position = generic_parameters.len() as u32;
            generic_parameters.push(ReflectedGenericParameter::new(position, name));
        }
        self
    }

    pub fn with_base_definition(mut self, base: ReflectedMember) -> Self {
        self.base_definition = Some(Box::new(base));
        self
    }

    /// Reflected parameters (index parameters for properties).
    pub fn parameters(&self) -> &[ReflectedParameter] {
        match &self.kind {
            ReflectedMemberKind::Constructor { parameters, .. }
            | ReflectedMemberKind::Method { parameters, .. } => parameters,
            ReflectedMemberKind::Property {
                index_parameters, ..
            } => index_parameters,
            ReflectedMemberKind::Field { .. } | ReflectedMemberKind::Event { .. } => &[],
        }
    }

    /// True for compiler-recognized operator methods.
    pub fn is_operator(&self) -> bool {
        matches!(
            self.kind,
            ReflectedMemberKind::Method {
                is_special_name: true,
                ..
            }
        ) && self.name.starts_with(OPERATOR_PREFIX)
    }

    /// True for property/event accessor methods (`get_X`, `add_Y`, ...).
    ///
    /// Those are surfaced through their property or event, never as methods.
    pub fn is_accessor_method(&self) -> bool {
        matches!(
            self.kind,
            ReflectedMemberKind::Method {
                is_special_name: true,
                ..
            }
        ) && !self.name.starts_with(OPERATOR_PREFIX)
    }
}
