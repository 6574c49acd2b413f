//! Lookup and assertion helpers over a built [`SolutionModel`].

use docdom::dom::{MemberModel, SolutionModel, TypeModel};

/// Find a type by full name, panicking with the known names on failure.
pub fn expect_type<'a>(solution: &'a SolutionModel, full_name: &str) -> &'a TypeModel {
    solution.find_type(full_name).unwrap_or_else(|| {
        let known: Vec<_> = solution.types().map(|t| t.full_name.as_str()).collect();
        panic!("type {full_name} not found; known: {known:?}")
    })
}

/// Find a member of a type by short signature.
pub fn expect_member<'a>(ty: &'a TypeModel, signature: &str) -> &'a MemberModel {
    ty.members()
        .find(|m| m.short_signature() == signature)
        .unwrap_or_else(|| {
            let known: Vec<_> = ty.members().map(|m| m.short_signature()).collect();
            panic!("member {signature} not found on {}; known: {known:?}", ty.full_name)
        })
}

/// Summary text of a member's documentation.
pub fn summary(member: &MemberModel) -> Option<&str> {
    member.doc().and_then(|d| d.summary.as_deref())
}

/// Every member of every type in the solution.
pub fn all_members(solution: &SolutionModel) -> Vec<&MemberModel> {
    solution.types().flat_map(|t| t.members()).collect()
}

/// Assert a solution built without any diagnostic.
pub fn assert_no_diagnostics(solution: &SolutionModel) {
    assert!(
        solution.diagnostics().is_empty(),
        "Expected no diagnostics, got:\n{}",
        solution
            .diagnostics()
            .iter()
            .map(|d| format!("  {d}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
