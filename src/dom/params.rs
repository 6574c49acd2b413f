//! ParameterBinder: pairs reflected parameters with `<param>`/`<typeparam>` docs.
//!
//! Matching is by exact name. A doc entry that names no reflected parameter is
//! dropped; it never becomes a diagnostic.

use smol_str::SmolStr;

use super::model::{GenericParameterModel, ParameterModel};
use crate::docs::{DocFragment, DocParam};
use crate::metadata::{ReflectedGenericParameter, ReflectedParameter};

/// Bind each reflected parameter to the `<param>` entry of the same name.
pub fn bind_parameters(
    parameters: &[ReflectedParameter],
    doc: Option<&DocFragment>,
) -> Vec<ParameterModel> {
    if let Some(doc) = doc {
        trace_unmatched(&doc.key, &doc.params, parameters.iter().map(|p| &p.name));
    }
    parameters
        .iter()
        .map(|param| ParameterModel {
            name: param.name.clone(),
            ty: param.ty.clone(),
            is_optional: param.is_optional,
            doc: doc.and_then(|d| d.param(&param.name)).cloned(),
        })
        .collect()
}

/// Bind each generic parameter to the `<typeparam>` entry of the same name.
pub fn bind_generic_parameters(
    parameters: &[ReflectedGenericParameter],
    doc: Option<&DocFragment>,
) -> Vec<GenericParameterModel> {
    if let Some(doc) = doc {
        trace_unmatched(&doc.key, &doc.type_params, parameters.iter().map(|p| &p.name));
    }
    parameters
        .iter()
        .map(|param| GenericParameterModel {
            name: param.name.clone(),
            position: param.position,
            doc: doc.and_then(|d| d.type_param(&param.name)).cloned(),
        })
        .collect()
}

/// Re-attach parameter docs after the owning member's fragment changed.
pub(crate) fn rebind_parameters(parameters: &mut [ParameterModel], doc: Option<&DocFragment>) {
    for param in parameters {
        param.doc = doc.and_then(|d| d.param(&param.name)).cloned();
    }
}

pub(crate) fn rebind_generic_parameters(
    parameters: &mut [GenericParameterModel],
    doc: Option<&DocFragment>,
) {
    for param in parameters {
        param.doc = doc.and_then(|d| d.type_param(&param.name)).cloned();
    }
}

fn trace_unmatched<'a>(
    key: &str,
    entries: &[DocParam],
    names: impl Iterator<Item = &'a SmolStr> + Clone,
) {
    for entry in entries {
        if !names.clone().any(|name| *name == entry.name) {
            tracing::trace!(member = key, param = %entry.name, "doc parameter matches nothing");
        }
    }
}
