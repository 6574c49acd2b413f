//! Inclusion switches and the caller-supplied member predicate.

use docdom::docs::DocComments;
use docdom::dom::{FindOptions, SolutionModel, SolutionModelBuilder};
use docdom::metadata::{AssemblyMetadata, ReflectedMember, ReflectedType, TypeRef, Visibility};
use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::model_assertions::*;

fn shapes(options: FindOptions) -> SolutionModel {
    SolutionModelBuilder::new(options)
        .assembly(shapes_assembly(), shapes_docs())
        .build()
        .unwrap()
}

/// One public documented type and one internal documented type.
fn mixed_visibility() -> (AssemblyMetadata, DocComments) {
    let metadata = AssemblyMetadata::new("Acme.Mixed")
        .with_type(ReflectedType::class("Acme.Mixed.Visible"))
        .with_type(ReflectedType::class("Acme.Mixed.Hidden").with_visibility(Visibility::Internal))
        .with_type(
            ReflectedType::class("Acme.Mixed.Hidden+Inner")
                .nested_in("Acme.Mixed.Hidden")
                .with_member(ReflectedMember::method("Acme.Mixed.Hidden+Inner", "Go", TypeRef::void())),
        );
    let docs = DocComments::new()
        .with_fragment(docdom::docs::DocFragment::new("T:Acme.Mixed.Visible").with_summary("Seen."))
        .with_fragment(docdom::docs::DocFragment::new("T:Acme.Mixed.Hidden").with_summary("Unseen."))
        .with_fragment(docdom::docs::DocFragment::new("T:Acme.Mixed.Hidden.Inner").with_summary("Inside."));
    (metadata, docs)
}

// =============================================================================
// MEMBER VISIBILITY
// =============================================================================

#[test]
fn test_private_members_excluded_by_default() {
    let solution = shapes(FindOptions::public_surface());
    for member in all_members(&solution) {
        assert!(!member.is_private_or_internal(), "{} leaked", member.doc_id());
    }
    let circle = expect_type(&solution, "Acme.Shapes.Circle");
    assert!(circle.fields.is_empty());
}

#[test]
fn test_private_members_switch() {
    let solution = shapes(FindOptions::public_surface().with_private_members(true));
    let circle = expect_type(&solution, "Acme.Shapes.Circle");
    let radius = expect_member(circle, "radius");
    assert!(radius.is_private_or_internal());
    assert!(radius.doc().is_none());
}

#[test]
fn test_private_undocumented_member_needs_both_switches() {
    let solution = shapes(FindOptions::default().with_private_members(true));
    let circle = expect_type(&solution, "Acme.Shapes.Circle");
    assert!(circle.fields.is_empty());
}

// =============================================================================
// TYPE SWITCHES
// =============================================================================

#[rstest]
#[case(false, vec!["Acme.Mixed.Visible"])]
#[case(true, vec!["Acme.Mixed.Hidden", "Acme.Mixed.Hidden+Inner", "Acme.Mixed.Visible"])]
fn test_internal_classes_switch(#[case] internal: bool, #[case] expected: Vec<&str>) {
    let (metadata, docs) = mixed_visibility();
    let solution = SolutionModelBuilder::new(FindOptions::default().with_internal_classes(internal))
        .assembly(metadata, docs)
        .build()
        .unwrap();

    let mut names: Vec<_> = solution.types().map(|t| t.full_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, expected);
}

#[test]
fn test_undocumented_classes_switch() {
    let without = SolutionModelBuilder::new(FindOptions::default())
        .assembly(core_assembly(), DocComments::new())
        .build()
        .unwrap();
    assert_eq!(without.type_count(), 0);
    assert!(without.namespaces().is_empty());

    let with = SolutionModelBuilder::new(FindOptions::default().with_undocumented_classes(true))
        .assembly(core_assembly(), DocComments::new())
        .build()
        .unwrap();
    assert_eq!(with.type_count(), 4);
    // Members still need their own switch.
    assert!(with.types().all(|t| t.member_count() == 0));
}

// =============================================================================
// CALLER PREDICATE
// =============================================================================

#[test]
fn test_member_filter_applies_after_visibility() {
    let solution = SolutionModelBuilder::new(FindOptions::default())
        .assembly(core_assembly(), core_docs())
        .member_filter(|member| !member.name().starts_with("Do"))
        .build()
        .unwrap();

    let order = expect_type(&solution, "Acme.Core.Order");
    assert!(order.methods.is_empty());
    assert_eq!(order.constructors.len(), 1);
    assert_eq!(order.properties.len(), 1);
    // Types are never dropped by the member predicate.
    assert_eq!(solution.type_count(), 4);
    assert_no_diagnostics(&solution);
}

#[test]
fn test_member_filter_sees_built_members() {
    let solution = SolutionModelBuilder::new(FindOptions::all())
        .assembly(shapes_assembly(), shapes_docs())
        .member_filter(|member| member.doc().is_some() || member.overrides().is_some())
        .build()
        .unwrap();
    let circle = expect_type(&solution, "Acme.Shapes.Circle");
    assert!(circle.fields.is_empty());
    assert_eq!(circle.methods.len(), 2);
}
