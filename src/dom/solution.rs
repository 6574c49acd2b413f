//! SolutionModelBuilder: every assembly of one build into a [`SolutionModel`].
//!
//! ```text
//! validate inputs (fail fast)
//!   ─► bind each assembly (rayon, order-preserving; failures → diagnostics)
//!   ─► type index (first assembly wins)
//!   ─► inherited docs (root-first over base chains)
//!   ─► extension methods (cross-assembly)
//!   ─► overload indices
//!   ─► namespace merge + namespace docs
//! ```
//!
//! Binding is a pure function of (metadata, docs, options) per assembly, so it
//! can run on worker threads. Everything after it is sequential and sees the
//! complete set of assemblies.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::assembly::AssemblyModelBuilder;
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::error::DomError;
use super::member::MemberModel;
use super::model::{AssemblyModel, NamespaceModel, SolutionModel, TypeModel};
use super::options::{FindOptions, MemberFilter};
use super::params::{rebind_generic_parameters, rebind_parameters};
use super::type_builder::assign_overload_indices;
use crate::base::{AssemblyId, MethodRef, TypeId};
use crate::docs::{DocCommentSource, DocComments, DocFragment};
use crate::metadata::{MetadataSource, TypeRef};

/// One `(assembly, doc file)` input pair.
struct AssemblyInput {
    metadata: Box<dyn MetadataSource>,
    docs: Option<Box<dyn DocCommentSource>>,
}

/// Result of binding one assembly.
struct BoundAssembly {
    docs: DocComments,
    model: Option<AssemblyModel>,
    diagnostics: Vec<Diagnostic>,
}

/// Builds a [`SolutionModel`] from any number of assemblies.
///
/// ```ignore
/// let solution = SolutionModelBuilder::new(FindOptions::default())
///     .assembly(core_metadata, XmlDocFile::from_path("Acme.Core.xml"))
///     .assembly(ext_metadata, XmlDocFile::from_path("Acme.Ext.xml"))
///     .namespace_docs(XmlDocFile::from_path("namespaces.xml"))
///     .build()?;
/// ```
pub struct SolutionModelBuilder {
    options: FindOptions,
    inputs: Vec<AssemblyInput>,
    namespace_docs: Option<Box<dyn DocCommentSource>>,
    member_filter: Option<MemberFilter>,
    parallel: bool,
}

impl SolutionModelBuilder {
    pub fn new(options: FindOptions) -> Self {
        Self {
            options,
            inputs: Vec::new(),
            namespace_docs: None,
            member_filter: None,
            parallel: true,
        }
    }

    /// Build from parallel lists: `docs[i]` documents `metadata[i]`.
    pub fn from_parallel_lists<M, D>(
        options: FindOptions,
        metadata: Vec<M>,
        docs: Vec<D>,
    ) -> Result<Self, DomError>
    where
        M: MetadataSource + 'static,
        D: DocCommentSource + 'static,
    {
        if metadata.len() != docs.len() {
            return Err(DomError::invalid_argument(format!(
                "{} assemblies but {} documentation files",
                metadata.len(),
                docs.len()
            )));
        }
        Ok(metadata
            .into_iter()
            .zip(docs)
            .fold(Self::new(options), |builder, (meta, doc)| builder.assembly(meta, doc)))
    }

    pub fn assembly(
        mut self,
        metadata: impl MetadataSource + 'static,
        docs: impl DocCommentSource + 'static,
    ) -> Self {
        self.inputs.push(AssemblyInput {
            metadata: Box::new(metadata),
            docs: Some(Box::new(docs)),
        });
        self
    }

    pub fn assembly_without_docs(mut self, metadata: impl MetadataSource + 'static) -> Self {
        self.inputs.push(AssemblyInput {
            metadata: Box::new(metadata),
            docs: None,
        });
        self
    }

    /// Separate file carrying per-namespace prose.
    pub fn namespace_docs(mut self, docs: impl DocCommentSource + 'static) -> Self {
        self.namespace_docs = Some(Box::new(docs));
        self
    }

    /// Extra member predicate, applied after the visibility filter.
    pub fn member_filter(
        mut self,
        filter: impl Fn(&MemberModel) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.member_filter = Some(Arc::new(filter));
        self
    }

    /// Bind assemblies on the rayon pool (default) or one after another.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn build(self) -> Result<SolutionModel, DomError> {
        self.validate()?;

        let options = self.options;
        let filter = self.member_filter.as_ref();
        let bound: Vec<BoundAssembly> = if self.parallel {
            self.inputs
                .par_iter()
                .enumerate()
                .map(|(index, input)| bind_assembly(index, input, &options, filter))
                .collect()
        } else {
            self.inputs
                .iter()
                .enumerate()
                .map(|(index, input)| bind_assembly(index, input, &options, filter))
                .collect()
        };

        let mut collector = DiagnosticCollector::new();
        let mut assemblies = Vec::with_capacity(bound.len());
        let mut all_docs = Vec::with_capacity(bound.len());
        for result in bound {
            collector.extend(result.diagnostics);
            if let Some(model) = result.model {
                assemblies.push(model);
                all_docs.push(result.docs);
            }
        }

        let namespace_docs = self
            .namespace_docs
            .as_deref()
            .and_then(|source| match source.load() {
                Ok(docs) => Some(docs),
                Err(err) => {
                    tracing::warn!(file = %source.label(), error = %err, "namespace documentation skipped");
                    collector.add(Diagnostic::DocFileSkipped {
                        assembly: None,
                        file: source.label(),
                        error: err.to_string(),
                    });
                    None
                }
            });

        let type_index = build_type_index(&assemblies);
        propagate_inherited_docs(&mut assemblies, &type_index, &all_docs);
        if !options.undocumented_members {
            drop_undocumented_members(&mut assemblies);
        }
        attach_extension_methods(&mut assemblies, &type_index);
        for ty in assemblies.iter_mut().flat_map(|a| a.types.iter_mut()) {
            assign_overload_indices(ty);
        }
        let namespaces = merge_namespaces(&assemblies, namespace_docs.as_ref());
        let types: Vec<TypeId> = assemblies
            .iter()
            .flat_map(|a| a.types.iter().map(|t| t.id))
            .collect();

        tracing::info!(
            assemblies = assemblies.len(),
            requested = self.inputs.len(),
            namespaces = namespaces.len(),
            types = types.len(),
            diagnostics = collector.len(),
            errors = collector.error_count(),
            "solution model built"
        );

        Ok(SolutionModel {
            assemblies,
            namespaces,
            types,
            type_index,
            diagnostics: collector.finish(),
        })
    }

    /// Contract checks that fail the build before anything is bound.
    fn validate(&self) -> Result<(), DomError> {
        if self.inputs.is_empty() {
            return Err(DomError::invalid_argument("no assemblies to document"));
        }
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for input in &self.inputs {
            let name = input.metadata.assembly_name();
            if name.is_empty() {
                return Err(DomError::invalid_argument("assembly with an empty name"));
            }
            if !seen.insert(name) {
                return Err(DomError::invalid_argument(format!(
                    "assembly {name} listed twice"
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// PER-ASSEMBLY BINDING
// ============================================================================

/// Load docs and bind one assembly. Never fails: errors and panics become
/// diagnostics.
fn bind_assembly(
    index: usize,
    input: &AssemblyInput,
    options: &FindOptions,
    filter: Option<&MemberFilter>,
) -> BoundAssembly {
    let name = input.metadata.assembly_name();
    let mut diagnostics = Vec::new();

    let docs = match input.docs.as_deref().map(|source| (source, source.load())) {
        None => DocComments::new(),
        Some((_, Ok(docs))) => docs,
        Some((source, Err(err))) => {
            tracing::warn!(assembly = name, file = %source.label(), error = %err, "documentation file skipped");
            diagnostics.push(Diagnostic::DocFileSkipped {
                assembly: Some(name.into()),
                file: source.label(),
                error: err.to_string(),
            });
            DocComments::new()
        }
    };

    let id = AssemblyId::new(index);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        AssemblyModelBuilder::new(id, options)
            .member_filter(filter)
            .build(&*input.metadata, &docs)
    }))
    .unwrap_or_else(|payload| Err(DomError::Panicked(panic_message(&*payload))));

    match outcome {
        Ok(model) => {
            diagnostics.extend(model.diagnostics.iter().cloned());
            BoundAssembly {
                docs,
                model: Some(model),
                diagnostics,
            }
        }
        Err(err) => {
            tracing::warn!(assembly = name, error = %err, "assembly skipped");
            diagnostics.push(Diagnostic::BindingFailure {
                assembly: name.into(),
                error: err.to_string(),
            });
            BoundAssembly {
                docs,
                model: None,
                diagnostics,
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ============================================================================
// SOLUTION PASSES
// ============================================================================

fn build_type_index(assemblies: &[AssemblyModel]) -> FxHashMap<SmolStr, TypeId> {
    let mut index: FxHashMap<SmolStr, TypeId> = FxHashMap::default();
    for ty in assemblies.iter().flat_map(|a| &a.types) {
        index.entry(ty.full_name.clone()).or_insert(ty.id);
    }
    index
}

fn type_at(assemblies: &[AssemblyModel], id: TypeId) -> Option<&TypeModel> {
    let pos = assemblies.binary_search_by_key(&id.assembly, |a| a.id).ok()?;
    assemblies[pos].types.get(id.slot())
}

fn type_at_mut(assemblies: &mut [AssemblyModel], id: TypeId) -> Option<&mut TypeModel> {
    let pos = assemblies.binary_search_by_key(&id.assembly, |a| a.id).ok()?;
    assemblies[pos].types.get_mut(id.slot())
}

/// Number of resolvable base types above `ty`.
fn base_depth(assemblies: &[AssemblyModel], index: &FxHashMap<SmolStr, TypeId>, ty: &TypeModel) -> usize {
    let mut depth = 0;
    let mut base = ty.base_type.as_ref().and_then(TypeRef::definition_name);
    while let Some(name) = base {
        let Some(next) = index.get(name).and_then(|id| type_at(assemblies, *id)) else {
            break;
        };
        depth += 1;
        if depth > index.len() {
            break;
        }
        base = next.base_type.as_ref().and_then(TypeRef::definition_name);
    }
    depth
}

fn needs_inherited_doc(doc: Option<&Arc<DocFragment>>) -> bool {
    doc.is_none_or(|d| d.inherit_doc && d.summary.is_none())
}

/// Documentation for the base member an override points at: the built
/// base member first, then any assembly's doc file, then the synthetic
/// override node itself.
fn inherited_doc(
    assemblies: &[AssemblyModel],
    index: &FxHashMap<SmolStr, TypeId>,
    all_docs: &[DocComments],
    base: &MemberModel,
) -> Option<Arc<DocFragment>> {
    let declaring = &base.core().declaring_type;
    let built = index
        .get(declaring)
        .and_then(|id| type_at(assemblies, *id))
        .and_then(|ty| ty.members().find(|m| m.doc_id() == base.doc_id()))
        .and_then(|m| m.doc().cloned());
    let usable = |doc: &Arc<DocFragment>| !needs_inherited_doc(Some(doc));

    built
        .filter(usable)
        .or_else(|| {
            all_docs
                .iter()
                .filter_map(|docs| docs.get(base.doc_id()))
                .find(|doc| usable(*doc))
                .cloned()
        })
        .or_else(|| base.doc().filter(|doc| usable(*doc)).cloned())
}

/// Copy documentation down to undocumented overrides, base types first so a
/// member can inherit from a member that itself inherited.
fn propagate_inherited_docs(
    assemblies: &mut [AssemblyModel],
    index: &FxHashMap<SmolStr, TypeId>,
    all_docs: &[DocComments],
) {
    let mut order: Vec<(usize, TypeId)> = assemblies
        .iter()
        .flat_map(|a| &a.types)
        .map(|ty| (base_depth(assemblies, index, ty), ty.id))
        .collect();
    order.sort_by_key(|&(depth, _)| depth);

    for (_, id) in order {
        let Some(ty) = type_at(assemblies, id) else {
            continue;
        };
        let updates: Vec<(usize, Arc<DocFragment>)> = ty
            .members()
            .enumerate()
            .filter(|(_, member)| needs_inherited_doc(member.doc()))
            .filter_map(|(position, member)| {
                let base = member.overrides()?;
                inherited_doc(assemblies, index, all_docs, base).map(|doc| (position, doc))
            })
            .collect();
        if updates.is_empty() {
            continue;
        }

        let Some(ty) = type_at_mut(assemblies, id) else {
            continue;
        };
        tracing::trace!(ty = %ty.full_name, members = updates.len(), "inherited docs");
        let mut members: Vec<&mut MemberModel> = ty.members_mut().collect();
        for (position, doc) in updates {
            let member = &mut *members[position];
            if let MemberModel::Method(method) = &mut *member {
                rebind_generic_parameters(&mut method.generic_parameters, Some(&doc));
            }
            let core = member.core_mut();
            rebind_parameters(&mut core.parameters, Some(&doc));
            core.doc = Some(doc);
            core.doc_inherited = true;
        }
    }
}

/// Remove overrides that were kept for inheritance but found nothing to inherit.
///
/// Runs before extension methods are attached, since those hold positions
/// into `methods`.
fn drop_undocumented_members(assemblies: &mut [AssemblyModel]) {
    let mut dropped = 0;
    for ty in assemblies.iter_mut().flat_map(|a| a.types.iter_mut()) {
        for collection in [
            &mut ty.constructors,
            &mut ty.fields,
            &mut ty.properties,
            &mut ty.methods,
            &mut ty.operators,
            &mut ty.events,
        ] {
            let before = collection.len();
            collection.retain(|member| member.doc().is_some());
            dropped += before - collection.len();
        }
    }
    if dropped > 0 {
        tracing::debug!(count = dropped, "undocumented members dropped");
    }
}

/// Attach every extension method to the type of its first parameter,
/// wherever in the solution that type is declared.
fn attach_extension_methods(assemblies: &mut [AssemblyModel], index: &FxHashMap<SmolStr, TypeId>) {
    let mut attachments: Vec<(TypeId, MethodRef)> = Vec::new();
    for ty in assemblies.iter().flat_map(|a| &a.types) {
        for (position, method) in ty.methods.iter().enumerate() {
            let Some(m) = method.as_method() else {
                continue;
            };
            if !m.is_static || !m.is_extension {
                continue;
            }
            let target = method
                .parameters()
                .first()
                .and_then(|p| p.ty.definition_name())
                .and_then(|name| index.get(name));
            if let Some(&target) = target {
                attachments.push((target, MethodRef::new(ty.id, position)));
            }
        }
    }

    tracing::debug!(count = attachments.len(), "extension methods attached");
    for (target, method) in attachments {
        if let Some(ty) = type_at_mut(assemblies, target) {
            ty.extension_methods.push(method);
        }
    }
}

/// Union per-assembly namespaces by name. Types keep assembly order among
/// equal simple names; namespaces end up sorted by name.
fn merge_namespaces(assemblies: &[AssemblyModel], namespace_docs: Option<&DocComments>) -> Vec<NamespaceModel> {
    let mut merged: IndexMap<SmolStr, (NamespaceModel, FxHashSet<TypeId>)> = IndexMap::new();
    for ns in assemblies.iter().flat_map(|a| &a.namespaces) {
        let (target, seen) = merged
            .entry(ns.name.clone())
            .or_insert_with(|| (NamespaceModel::new(ns.name.clone()), FxHashSet::default()));
        target
            .types
            .extend(ns.types.iter().copied().filter(|id| seen.insert(*id)));
        if target.doc.is_none() {
            target.doc = ns.doc.clone();
        }
    }

    let mut namespaces: Vec<NamespaceModel> = merged.into_values().map(|(ns, _)| ns).collect();
    for ns in &mut namespaces {
        ns.types.sort_by(|a, b| {
            let name = |id: &TypeId| type_at(assemblies, *id).map(|t| t.name.clone());
            name(a).cmp(&name(b))
        });
        if let Some(doc) = namespace_docs.and_then(|docs| docs.namespace_doc(&ns.name)) {
            ns.doc = Some(doc.clone());
        }
    }
    namespaces.sort_by(|a, b| a.name.cmp(&b.name));
    namespaces
}
