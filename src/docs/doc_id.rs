//! Doc-comment IDs for reflected symbols.
//!
//! Compilers key every `<member>` entry by an ID string. Binding a reflected
//! symbol to its documentation means computing the same string from the
//! reflected shape:
//!
//! ```text
//! T:Acme.Outer.Inner`1
//! M:Acme.Order.#ctor(System.Int32)
//! M:Acme.Order.Map``1(System.Func{`0,``0})
//! M:Acme.Money.op_Implicit(Acme.Money)~System.Decimal
//! P:Acme.Table.Item(System.Int32)
//! F:Acme.Order.Empty
//! E:Acme.Order.Changed
//! ```

use crate::base::names;
use crate::metadata::{ReflectedMember, ReflectedMemberKind, TypeRef};

/// `T:` ID of a type given its runtime full name.
pub fn type_doc_id(full_name: &str) -> String {
    format!("T:{}", names::doc_id_name(full_name))
}

/// `N:` ID of a namespace.
pub fn namespace_doc_id(namespace: &str) -> String {
    format!("N:{namespace}")
}

/// `M:`/`P:`/`F:`/`E:` ID of a member, keyed by its declaring type.
pub fn member_doc_id(member: &ReflectedMember) -> String {
    let prefix = match member.kind {
        ReflectedMemberKind::Constructor { .. } | ReflectedMemberKind::Method { .. } => "M:",
        ReflectedMemberKind::Property { .. } => "P:",
        ReflectedMemberKind::Field { .. } => "F:",
        ReflectedMemberKind::Event { .. } => "E:",
    };

    let mut id = String::with_capacity(64);
    id.push_str(prefix);
    id.push_str(&names::doc_id_name(&member.declaring_type));
    id.push('.');
    // `.ctor` → `#ctor`, `IFoo.Bar` → `IFoo#Bar`
    id.push_str(&member.name.replace('.', "#"));

    if let ReflectedMemberKind::Method {
        generic_parameters, ..
    } = &member.kind
    {
        if !generic_parameters.is_empty() {
            id.push_str("``");
            id.push_str(&generic_parameters.len().to_string());
        }
    }

    let parameters = member.parameters();
    if !parameters.is_empty() {
        id.push('(');
        for (i, param) in parameters.iter().enumerate() {
            if i > 0 {
                id.push(',');
            }
            write_type_ref(&param.ty, &mut id);
        }
        id.push(')');
    }

    if let ReflectedMemberKind::Method { return_type, .. } = &member.kind {
        if member.is_operator() && matches!(member.name.as_str(), "op_Implicit" | "op_Explicit") {
            id.push('~');
            write_type_ref(return_type, &mut id);
        }
    }

    id
}

fn write_type_ref(ty: &TypeRef, out: &mut String) {
    match ty {
        TypeRef::Named { full_name, args } => {
            if args.is_empty() {
                out.push_str(&names::doc_id_name(full_name));
            } else {
                write_instantiated_name(full_name, args, out);
            }
        }
        TypeRef::GenericTypeParam { position, .. } => {
            out.push('`');
            out.push_str(&position.to_string());
        }
        TypeRef::GenericMethodParam { position, .. } => {
            out.push_str("``");
            out.push_str(&position.to_string());
        }
        TypeRef::Array { element, rank } => {
            write_type_ref(element, out);
            if *rank <= 1 {
                out.push_str("[]");
            } else {
                let dims = vec!["0:"; *rank as usize];
                out.push('[');
                out.push_str(&dims.join(","));
                out.push(']');
            }
        }
        TypeRef::ByRef { target } => {
            write_type_ref(target, out);
            out.push('@');
        }
        TypeRef::Pointer { target } => {
            write_type_ref(target, out);
            out.push('*');
        }
    }
}

/// Instantiated generics list their arguments in place of `` `N `` markers.
///
/// The runtime name carries the arguments of every enclosing type in one flat
/// list, so each nesting segment takes as many as its own marker declares:
/// `` Outer`1+Inner`` with `[Int32]` renders as `Outer{System.Int32}.Inner`.
fn write_instantiated_name(full_name: &str, args: &[TypeRef], out: &mut String) {
    let segments: Vec<(&str, usize)> = full_name
        .split('+')
        .map(|segment| (names::strip_arity(segment), arity_of(segment)))
        .collect();
    let declared: usize = segments.iter().map(|(_, arity)| arity).sum();

    if declared != args.len() {
        // Markers don't account for the arguments; attach them all to the innermost type.
        let stripped: Vec<&str> = segments.iter().map(|(name, _)| *name).collect();
        out.push_str(&stripped.join("."));
        write_type_args(args, out);
        return;
    }

    let mut rest = args;
    for (i, (name, arity)) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(name);
        if *arity > 0 {
            let (own, tail) = rest.split_at(*arity);
            write_type_args(own, out);
            rest = tail;
        }
    }
}

fn write_type_args(args: &[TypeRef], out: &mut String) {
    out.push('{');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_type_ref(arg, out);
    }
    out.push('}');
}

fn arity_of(segment: &str) -> usize {
    segment
        .rsplit_once('`')
        .and_then(|(_, count)| count.parse().ok())
        .unwrap_or(0)
}
