//! MemberModelBuilder: one reflected member to one member model.
//!
//! [`build_member`] is the single factory: it matches on the reflected kind
//! and produces exactly one [`MemberModel`] variant with its documentation,
//! parameters, short signature and (for virtual members) override link.

use std::sync::Arc;

use smol_str::SmolStr;

use super::model::{GenericParameterModel, ParameterModel};
use super::params::{bind_generic_parameters, bind_parameters};
use crate::base::{TypeId, names};
use crate::docs::{DocComments, DocFragment, doc_id};
use crate::metadata::{
    Accessor, OPERATOR_PREFIX, ReflectedMember, ReflectedMemberKind, TypeRef, Visibility,
};

// ============================================================================
// OWNERS
// ============================================================================

/// Minimal stand-in for a base type that owns an overridden member.
///
/// It is not the base type's built [`TypeModel`](super::TypeModel); resolve it
/// through [`SolutionModel::find_type`](super::SolutionModel::find_type) when
/// the real model is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticTypeRef {
    pub full_name: SmolStr,
}

impl SyntheticTypeRef {
    pub fn name(&self) -> &str {
        names::display_name(&self.full_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberOwner {
    /// A type built into the graph.
    Type(TypeId),
    /// Stand-in for the base type of an override link.
    Synthetic(SyntheticTypeRef),
}

impl MemberOwner {
    pub fn type_id(&self) -> Option<TypeId> {
        match self {
            MemberOwner::Type(id) => Some(*id),
            MemberOwner::Synthetic(_) => None,
        }
    }
}

// ============================================================================
// MEMBER MODELS
// ============================================================================

/// State shared by every member variant.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberCore {
    pub owner: MemberOwner,
    /// Reflected name (`.ctor`, `op_Addition`, `Item`, ...).
    pub name: SmolStr,
    /// Full name of the type that declares the member.
    pub declaring_type: SmolStr,
    /// Full name of the type the member was reflected on.
    pub reflected_type: SmolStr,
    pub doc_id: String,
    pub short_signature: String,
    pub doc: Option<Arc<DocFragment>>,
    /// `doc` was copied from an overridden base member.
    pub doc_inherited: bool,
    pub parameters: Vec<ParameterModel>,
    pub overrides: Option<Box<MemberModel>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstructorModel {
    pub core: MemberCore,
    pub visibility: Visibility,
    pub is_static: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodModel {
    pub core: MemberCore,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_virtual: bool,
    pub is_abstract: bool,
    pub is_operator: bool,
    pub is_extension: bool,
    pub return_type: TypeRef,
    pub generic_parameters: Vec<GenericParameterModel>,
    /// 1-based position among same-named methods of the owning type; `None`
    /// when the name is unique.
    pub overload_index: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyModel {
    pub core: MemberCore,
    pub getter: Option<Accessor>,
    pub setter: Option<Accessor>,
    pub property_type: TypeRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldModel {
    pub core: MemberCore,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_literal: bool,
    pub field_type: TypeRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventModel {
    pub core: MemberCore,
    pub add: Accessor,
    pub remove: Accessor,
    pub handler_type: TypeRef,
}

/// One member of a type.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberModel {
    Constructor(ConstructorModel),
    Method(MethodModel),
    Property(PropertyModel),
    Field(FieldModel),
    Event(EventModel),
}

impl MemberModel {
    pub fn core(&self) -> &MemberCore {
        match self {
            MemberModel::Constructor(m) => &m.core,
            MemberModel::Method(m) => &m.core,
            MemberModel::Property(m) => &m.core,
            MemberModel::Field(m) => &m.core,
            MemberModel::Event(m) => &m.core,
        }
    }

    pub fn core_mut(&mut self) -> &mut MemberCore {
        match self {
            MemberModel::Constructor(m) => &mut m.core,
            MemberModel::Method(m) => &mut m.core,
            MemberModel::Property(m) => &mut m.core,
            MemberModel::Field(m) => &mut m.core,
            MemberModel::Event(m) => &mut m.core,
        }
    }

    pub fn name(&self) -> &str {
        &self.core().name
    }

    pub fn doc(&self) -> Option<&Arc<DocFragment>> {
        self.core().doc.as_ref()
    }

    pub fn doc_id(&self) -> &str {
        &self.core().doc_id
    }

    pub fn parameters(&self) -> &[ParameterModel] {
        &self.core().parameters
    }

    pub fn owner(&self) -> &MemberOwner {
        &self.core().owner
    }

    pub fn as_method(&self) -> Option<&MethodModel> {
        match self {
            MemberModel::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn overload_index(&self) -> Option<u32> {
        self.as_method().and_then(|m| m.overload_index)
    }

    pub fn is_public(&self) -> bool {
        match self {
            MemberModel::Constructor(m) => m.visibility.is_public(),
            MemberModel::Method(m) => m.visibility.is_public(),
            MemberModel::Field(m) => m.visibility.is_public(),
            MemberModel::Property(p) => [p.getter, p.setter]
                .into_iter()
                .flatten()
                .any(|a| a.visibility.is_public()),
            MemberModel::Event(e) => e.add.visibility.is_public() || e.remove.visibility.is_public(),
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            MemberModel::Constructor(m) => m.is_static,
            MemberModel::Method(m) => m.is_static,
            MemberModel::Field(m) => m.is_static,
            MemberModel::Property(p) => [p.getter, p.setter].into_iter().flatten().any(|a| a.is_static),
            MemberModel::Event(e) => e.add.is_static || e.remove.is_static,
        }
    }

    /// True when no part of the member is reachable from outside its assembly.
    ///
    /// Properties and events are judged by their most visible accessor.
    pub fn is_private_or_internal(&self) -> bool {
        match self {
            MemberModel::Constructor(m) => m.visibility.is_private_or_internal(),
            MemberModel::Method(m) => m.visibility.is_private_or_internal(),
            MemberModel::Field(m) => m.visibility.is_private_or_internal(),
            MemberModel::Property(p) => [p.getter, p.setter]
                .into_iter()
                .flatten()
                .map(|a| a.visibility)
                .reduce(Visibility::widest)
                .is_none_or(Visibility::is_private_or_internal),
            MemberModel::Event(e) => e
                .add
                .visibility
                .widest(e.remove.visibility)
                .is_private_or_internal(),
        }
    }

    /// Return type of a method, type of a property or field, handler type of
    /// an event. `None` for constructors.
    pub fn return_or_value_type(&self) -> Option<&TypeRef> {
        match self {
            MemberModel::Constructor(_) => None,
            MemberModel::Method(m) => Some(&m.return_type),
            MemberModel::Property(p) => Some(&p.property_type),
            MemberModel::Field(f) => Some(&f.field_type),
            MemberModel::Event(e) => Some(&e.handler_type),
        }
    }

    /// Declaring type of an inherited member.
    pub fn inherited_from(&self) -> Option<&str> {
        let core = self.core();
        (core.declaring_type != core.reflected_type).then_some(core.declaring_type.as_str())
    }

    /// The base member this member overrides.
    pub fn overrides(&self) -> Option<&MemberModel> {
        self.core().overrides.as_deref()
    }

    /// Display name used for overload grouping: operator prefix and arity
    /// marker removed.
    pub fn simple_name(&self) -> &str {
        let name = self.name();
        match self {
            MemberModel::Method(m) if m.is_operator => {
                names::strip_arity(name.strip_prefix(OPERATOR_PREFIX).unwrap_or(name))
            }
            _ => names::strip_arity(name),
        }
    }

    pub fn short_signature(&self) -> &str {
        &self.core().short_signature
    }

    /// Signature as the method reads when called on its first argument.
    ///
    /// Same as [`short_signature`](Self::short_signature) for anything but
    /// extension methods.
    pub fn short_signature_as_extension(&self) -> String {
        match self {
            MemberModel::Method(m) if m.is_extension => {
                method_signature(self.simple_name(), &m.generic_parameters, self.parameters(), 1)
            }
            _ => self.core().short_signature.clone(),
        }
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// What [`build_member`] needs to know about the type under construction.
#[derive(Clone, Copy)]
pub struct MemberContext<'a> {
    pub owner: TypeId,
    /// Full name of the type being built.
    pub building_type: &'a str,
    pub docs: &'a DocComments,
}

/// Build the model of one reflected member.
pub fn build_member(member: &ReflectedMember, cx: &MemberContext<'_>) -> MemberModel {
    let overrides = resolve_override(member, cx);
    build_variant(
        member,
        MemberOwner::Type(cx.owner),
        cx.building_type,
        cx.docs,
        overrides,
    )
}

/// Build the override link of a member.
///
/// Only members declared by the type under construction get one, and only
/// when reflection reports a base declaration on a different type.
fn resolve_override(member: &ReflectedMember, cx: &MemberContext<'_>) -> Option<Box<MemberModel>> {
    if member.declaring_type != cx.building_type {
        return None;
    }
    let base = member.base_definition.as_deref()?;
    if base.declaring_type == member.declaring_type || base.declaring_type.is_empty() {
        return None;
    }
    let owner = MemberOwner::Synthetic(SyntheticTypeRef {
        full_name: base.declaring_type.clone(),
    });
    Some(Box::new(build_variant(
        base,
        owner,
        &base.declaring_type,
        cx.docs,
        None,
    )))
}

fn build_variant(
    member: &ReflectedMember,
    owner: MemberOwner,
    reflected_type: &str,
    docs: &DocComments,
    overrides: Option<Box<MemberModel>>,
) -> MemberModel {
    let doc_id = doc_id::member_doc_id(member);
    let doc = docs.get(&doc_id).cloned();
    let parameters = bind_parameters(member.parameters(), doc.as_deref());

    let core = MemberCore {
        owner,
        name: member.name.clone(),
        declaring_type: member.declaring_type.clone(),
        reflected_type: reflected_type.into(),
        doc_id,
        short_signature: String::new(),
        doc,
        doc_inherited: false,
        parameters,
        overrides,
    };

    let mut model = match &member.kind {
        ReflectedMemberKind::Constructor {
            visibility,
            is_static,
            ..
        } => MemberModel::Constructor(ConstructorModel {
            core,
            visibility: *visibility,
            is_static: *is_static,
        }),
        ReflectedMemberKind::Method {
            visibility,
            is_static,
            is_virtual,
            is_abstract,
            is_extension,
            return_type,
            generic_parameters,
            ..
        } => {
            let generic_parameters = bind_generic_parameters(generic_parameters, core.doc.as_deref());
            MemberModel::Method(MethodModel {
                core,
                visibility: *visibility,
                is_static: *is_static,
                is_virtual: *is_virtual,
                is_abstract: *is_abstract,
                is_operator: member.is_operator(),
                is_extension: *is_extension,
                return_type: return_type.clone(),
                generic_parameters,
                overload_index: None,
            })
        }
        ReflectedMemberKind::Property {
            getter,
            setter,
            property_type,
            ..
        } => MemberModel::Property(PropertyModel {
            core,
            getter: *getter,
            setter: *setter,
            property_type: property_type.clone(),
        }),
        ReflectedMemberKind::Field {
            visibility,
            is_static,
            is_literal,
            field_type,
        } => MemberModel::Field(FieldModel {
            core,
            visibility: *visibility,
            is_static: *is_static,
            is_literal: *is_literal,
            field_type: field_type.clone(),
        }),
        ReflectedMemberKind::Event {
            add,
            remove,
            handler_type,
        } => MemberModel::Event(EventModel {
            core,
            add: *add,
            remove: *remove,
            handler_type: handler_type.clone(),
        }),
    };

    let signature = short_signature(&model);
    model.core_mut().short_signature = signature;
    model
}

// ============================================================================
// SIGNATURES
// ============================================================================

fn short_signature(model: &MemberModel) -> String {
    let core = model.core();
    match model {
        MemberModel::Constructor(_) => format!(
            "{}({})",
            names::display_name(&core.reflected_type),
            parameter_list(&core.parameters, 0)
        ),
        MemberModel::Method(m) => method_signature(
            model.simple_name(),
            &m.generic_parameters,
            &core.parameters,
            0,
        ),
        MemberModel::Property(_) if !core.parameters.is_empty() => {
            format!("{}[{}]", core.name, parameter_list(&core.parameters, 0))
        }
        MemberModel::Property(_) | MemberModel::Field(_) | MemberModel::Event(_) => {
            core.name.to_string()
        }
    }
}

fn method_signature(
    name: &str,
    generics: &[GenericParameterModel],
    parameters: &[ParameterModel],
    skip: usize,
) -> String {
    let mut out = String::from(name);
    if !generics.is_empty() {
        let generics: Vec<&str> = generics.iter().map(|g| g.name.as_str()).collect();
        out.push('<');
        out.push_str(&generics.join(", "));
        out.push('>');
    }
    out.push('(');
    out.push_str(&parameter_list(parameters, skip));
    out.push(')');
    out
}

fn parameter_list(parameters: &[ParameterModel], skip: usize) -> String {
    parameters
        .iter()
        .skip(skip)
        .map(|p| p.ty.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}
