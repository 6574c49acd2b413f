//! CLR name helpers.
//!
//! Reflected names use the runtime form: `.` between namespace segments, `+`
//! between a declaring type and its nested type, and a `` `N `` suffix for
//! generic arity (`` ``N `` on generic methods).

/// Strip a trailing generic arity marker: `` List`1 `` → `List`, `` Map``2 `` → `Map`.
pub fn strip_arity(name: &str) -> &str {
    match name.find('`') {
        Some(pos) if name[pos..].trim_start_matches('`').bytes().all(|b| b.is_ascii_digit()) => {
            &name[..pos]
        }
        _ => name,
    }
}

/// Last segment of a full name, across both namespace and nesting separators.
pub fn simple_name(full_name: &str) -> &str {
    full_name
        .rsplit(['.', '+'])
        .next()
        .unwrap_or(full_name)
}

/// Display name of a full name: last segment with the arity marker removed.
pub fn display_name(full_name: &str) -> &str {
    strip_arity(simple_name(full_name))
}

/// Replace nesting separators so the name follows doc-comment ID conventions.
pub fn doc_id_name(full_name: &str) -> String {
    full_name.replace('+', ".")
}

/// Split a top-level full name into `(namespace, name)`.
///
/// Nested names are split at the outermost type: `N.Outer+Inner` → `("N", "Outer+Inner")`.
pub fn split_namespace(full_name: &str) -> (&str, &str) {
    let outer_end = full_name.find('+').unwrap_or(full_name.len());
    match full_name[..outer_end].rfind('.') {
        Some(dot) => (&full_name[..dot], &full_name[dot + 1..]),
        None => ("", full_name),
    }
}
