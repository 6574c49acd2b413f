//! TypeModelBuilder: one reflected type to one [`TypeModel`].
//!
//! ```text
//! members ─► build_member ─► visibility filter ─► caller predicate
//!        ─► partition (ctors/fields/props/methods/operators/events)
//!        ─► ordinal sort by short signature
//! ```
//!
//! Nesting links and extension methods are filled in later by the assembly
//! and solution passes.

use rustc_hash::FxHashMap;

use super::member::{MemberContext, MemberModel, build_member};
use super::model::{TypeKind, TypeModel};
use super::options::{FindOptions, MemberFilter};
use super::params::bind_generic_parameters;
use crate::base::TypeId;
use crate::docs::{DocComments, doc_id};
use crate::metadata::ReflectedType;

pub struct TypeModelBuilder<'a> {
    options: &'a FindOptions,
    filter: Option<&'a MemberFilter>,
}

impl<'a> TypeModelBuilder<'a> {
    pub fn new(options: &'a FindOptions) -> Self {
        Self {
            options,
            filter: None,
        }
    }

    pub fn member_filter(mut self, filter: Option<&'a MemberFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn build(&self, ty: &ReflectedType, id: TypeId, docs: &DocComments) -> TypeModel {
        let doc_id = doc_id::type_doc_id(&ty.full_name);
        let doc = docs.get(&doc_id).cloned();

        let mut model = TypeModel {
            id,
            full_name: ty.full_name.clone(),
            namespace: ty.namespace().into(),
            name: ty.name().into(),
            doc_id,
            kind: TypeKind::classify(ty),
            visibility: ty.visibility,
            flags: ty.flags,
            base_type: ty.base_type.clone(),
            interfaces: ty.interfaces.clone(),
            declaring_type: None,
            nested_types: Vec::new(),
            generic_parameters: bind_generic_parameters(&ty.generic_parameters, doc.as_deref()),
            doc,
            constructors: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            operators: Vec::new(),
            events: Vec::new(),
            extension_methods: Vec::new(),
        };

        let cx = MemberContext {
            owner: id,
            building_type: &ty.full_name,
            docs,
        };

        for member in &ty.members {
            if member.is_accessor_method() {
                continue;
            }
            let built = build_member(member, &cx);
            if !self.includes(&built) {
                tracing::trace!(ty = %ty.full_name, member = %built.doc_id(), "member filtered out");
                continue;
            }
            let collection = match &built {
                MemberModel::Constructor(_) => &mut model.constructors,
                MemberModel::Field(_) => &mut model.fields,
                MemberModel::Property(_) => &mut model.properties,
                MemberModel::Event(_) => &mut model.events,
                MemberModel::Method(m) if m.is_operator => &mut model.operators,
                MemberModel::Method(_) => &mut model.methods,
            };
            collection.push(built);
        }

        for collection in [
            &mut model.constructors,
            &mut model.fields,
            &mut model.properties,
            &mut model.methods,
            &mut model.operators,
            &mut model.events,
        ] {
            collection.sort_by(|a, b| a.short_signature().cmp(b.short_signature()));
        }

        model
    }

    fn includes(&self, member: &MemberModel) -> bool {
        if member.is_private_or_internal() && !self.options.private_members {
            return false;
        }
        // An undocumented override may still inherit documentation; the solution
        // drops it afterwards if it doesn't.
        if member.doc().is_none() && member.overrides().is_none() && !self.options.undocumented_members
        {
            return false;
        }
        self.filter.is_none_or(|filter| (**filter)(member))
    }
}

/// Number same-named methods 1, 2, 3... in short-signature order.
///
/// Methods whose simple name is unique get no index.
pub fn assign_overload_indices(ty: &mut TypeModel) {
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    for method in &ty.methods {
        *counts.entry(method.simple_name().to_string()).or_default() += 1;
    }

    let mut next: FxHashMap<String, u32> = FxHashMap::default();
    for method in &mut ty.methods {
        let name = method.simple_name().to_string();
        let index = if counts.get(&name).copied().unwrap_or(0) > 1 {
            let slot = next.entry(name).or_default();
            *slot += 1;
            Some(*slot)
        } else {
            None
        };
        if let MemberModel::Method(m) = method {
            m.overload_index = index;
        }
    }
}
