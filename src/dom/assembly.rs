//! AssemblyModelBuilder: one assembly plus its doc file to one [`AssemblyModel`].
//!
//! ```text
//! load_types ─► validate ─► select (FindOptions)
//!     ─► phase 1: flat TypeModel arena
//!     ─► phase 2: nested-type linking
//!     ─► namespace partition ─► unbound entries
//! ```
//!
//! The name lookups built here live for one `build` call only.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::diagnostics::Diagnostic;
use super::error::DomError;
use super::model::{AssemblyModel, NamespaceModel, TypeModel};
use super::options::{FindOptions, MemberFilter};
use super::type_builder::TypeModelBuilder;
use crate::base::{AssemblyId, TypeId};
use crate::docs::{DocComments, DocIdKind, doc_id};
use crate::metadata::{MetadataError, MetadataSource, ReflectedType};

pub struct AssemblyModelBuilder<'a> {
    id: AssemblyId,
    options: &'a FindOptions,
    filter: Option<&'a MemberFilter>,
}

impl<'a> AssemblyModelBuilder<'a> {
    pub fn new(id: AssemblyId, options: &'a FindOptions) -> Self {
        Self {
            id,
            options,
            filter: None,
        }
    }

    pub fn member_filter(mut self, filter: Option<&'a MemberFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Bind the assembly's reflected types against its documentation.
    ///
    /// Fails when the metadata cannot be loaded or is inconsistent; the caller
    /// turns that into a binding-failure diagnostic.
    pub fn build(
        &self,
        source: &dyn MetadataSource,
        docs: &DocComments,
    ) -> Result<AssemblyModel, DomError> {
        let name: SmolStr = source.assembly_name().into();
        let reflected = source.load_types()?;
        validate(&name, &reflected)?;

        let selected = self.select_types(&reflected, docs);

        // Phase 1: flat construction.
        let type_builder = TypeModelBuilder::new(self.options).member_filter(self.filter);
        let mut types: Vec<TypeModel> = selected
            .iter()
            .enumerate()
            .map(|(slot, ty)| type_builder.build(ty, TypeId::new(self.id, slot), docs))
            .collect();

        // Phase 2: graph linking.
        link_nested_types(&mut types, &selected);

        let namespaces = partition_namespaces(&types, docs);
        let diagnostics: Vec<Diagnostic> = unbound_entries(&name, &reflected, docs).into_iter().collect();

        tracing::debug!(
            assembly = %name,
            reflected = reflected.len(),
            types = types.len(),
            namespaces = namespaces.len(),
            "bound assembly"
        );

        Ok(AssemblyModel {
            id: self.id,
            name,
            types,
            namespaces,
            diagnostics,
        })
    }

    /// Types that pass [`FindOptions`], in reflection order. A nested type
    /// is kept only when its whole declaring chain is kept.
    fn select_types<'t>(&self, reflected: &'t [ReflectedType], docs: &DocComments) -> Vec<&'t ReflectedType> {
        let by_name: FxHashMap<&str, usize> = reflected
            .iter()
            .enumerate()
            .map(|(i, ty)| (ty.full_name.as_str(), i))
            .collect();
        let passes: Vec<bool> = reflected.iter().map(|ty| self.type_passes(ty, docs)).collect();

        reflected
            .iter()
            .enumerate()
            .filter(|&(index, _)| {
                let mut current = index;
                loop {
                    if !passes[current] {
                        return false;
                    }
                    match reflected[current]
                        .declaring_type
                        .as_deref()
                        .and_then(|outer| by_name.get(outer))
                    {
                        Some(&outer) => current = outer,
                        None => return true,
                    }
                }
            })
            .map(|(_, ty)| ty)
            .collect()
    }

    fn type_passes(&self, ty: &ReflectedType, docs: &DocComments) -> bool {
        if ty.visibility.is_private_or_internal() && !self.options.internal_classes {
            tracing::trace!(ty = %ty.full_name, "type not visible");
            return false;
        }
        if !self.options.undocumented_classes && !docs.contains(&doc_id::type_doc_id(&ty.full_name)) {
            tracing::trace!(ty = %ty.full_name, "type undocumented");
            return false;
        }
        true
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Reject metadata the builder cannot bind: duplicate type names, declaring
/// types that do not exist or form a cycle, and members without a declaring
/// type.
fn validate(assembly: &str, types: &[ReflectedType]) -> Result<(), MetadataError> {
    let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
    for (index, ty) in types.iter().enumerate() {
        if by_name.insert(ty.full_name.as_str(), index).is_some() {
            return Err(MetadataError::malformed(
                assembly,
                format!("type {} is declared twice", ty.full_name),
            ));
        }
    }

    for ty in types {
        let mut steps = 0;
        let mut current = ty;
        while let Some(outer) = current.declaring_type.as_deref() {
            let Some(&index) = by_name.get(outer) else {
                return Err(MetadataError::malformed(
                    assembly,
                    format!("{} is nested in unknown type {}", current.full_name, outer),
                ));
            };
            steps += 1;
            if steps > types.len() {
                return Err(MetadataError::malformed(
                    assembly,
                    format!("declaring-type cycle through {}", ty.full_name),
                ));
            }
            current = &types[index];
        }

        if let Some(member) = ty.members.iter().find(|m| m.declaring_type.is_empty()) {
            return Err(MetadataError::malformed(
                assembly,
                format!("member {}.{} has no declaring type", ty.full_name, member.name),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// LINKING AND PARTITIONING
// ============================================================================

/// Attach each nested type to its declaring type, walking declaring chains.
/// A type is linked at most once.
fn link_nested_types(types: &mut [TypeModel], selected: &[&ReflectedType]) {
    let by_name: FxHashMap<&str, usize> = selected
        .iter()
        .enumerate()
        .map(|(i, ty)| (ty.full_name.as_str(), i))
        .collect();
    let mut linked: FxHashSet<usize> = FxHashSet::default();

    for start in 0..selected.len() {
        let mut child = start;
        while let Some(outer) = selected[child].declaring_type.as_deref() {
            let Some(&parent) = by_name.get(outer) else {
                break;
            };
            if !linked.insert(child) {
                break;
            }
            let (child_id, parent_id) = (types[child].id, types[parent].id);
            types[child].declaring_type = Some(parent_id);
            types[parent].nested_types.push(child_id);
            child = parent;
        }
    }

    let names: Vec<(SmolStr, SmolStr)> = types
        .iter()
        .map(|t| (t.name.clone(), t.full_name.clone()))
        .collect();
    for ty in types.iter_mut() {
        ty.nested_types.sort_by(|a, b| names[a.slot()].cmp(&names[b.slot()]));
    }
}

/// Group top-level types by namespace; namespaces sorted by name, types by
/// simple name.
fn partition_namespaces(types: &[TypeModel], docs: &DocComments) -> Vec<NamespaceModel> {
    let mut groups: IndexMap<SmolStr, NamespaceModel> = IndexMap::new();
    for ty in types.iter().filter(|t| !t.is_nested()) {
        groups
            .entry(ty.namespace.clone())
            .or_insert_with(|| NamespaceModel::new(ty.namespace.clone()))
            .types
            .push(ty.id);
    }

    let mut namespaces: Vec<NamespaceModel> = groups.into_values().collect();
    for ns in &mut namespaces {
        ns.types.sort_by(|a, b| {
            let (a, b) = (&types[a.slot()], &types[b.slot()]);
            (&a.name, &a.full_name).cmp(&(&b.name, &b.full_name))
        });
        ns.doc = docs.namespace_doc(&ns.name).cloned();
    }
    namespaces.sort_by(|a, b| a.name.cmp(&b.name));
    namespaces
}

/// Type and member doc entries that name no reflected symbol.
///
/// Compared against everything reflection reported, so entries for symbols
/// that [`FindOptions`] filtered out still count as bound.
fn unbound_entries(assembly: &SmolStr, reflected: &[ReflectedType], docs: &DocComments) -> Option<Diagnostic> {
    let mut known: FxHashSet<String> = FxHashSet::default();
    for ty in reflected {
        known.insert(doc_id::type_doc_id(&ty.full_name));
        known.extend(ty.members.iter().map(doc_id::member_doc_id));
    }

    let mut unbound_types = Vec::new();
    let mut unbound_members = Vec::new();
    for fragment in docs.iter() {
        if known.contains(fragment.key.as_str()) {
            continue;
        }
        match fragment.kind() {
            Some(DocIdKind::Type) => unbound_types.push(fragment.clone()),
            Some(kind) if kind.is_member() => unbound_members.push(fragment.clone()),
            _ => {}
        }
    }

    if unbound_types.is_empty() && unbound_members.is_empty() {
        return None;
    }
    tracing::debug!(
        assembly = %assembly,
        types = unbound_types.len(),
        members = unbound_members.len(),
        "unbound doc entries"
    );
    Some(Diagnostic::UnboundEntries {
        assembly: assembly.clone(),
        unbound_types,
        unbound_members,
    })
}
