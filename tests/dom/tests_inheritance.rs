//! Documentation inherited along override chains.

use docdom::docs::{DocComments, DocFragment};
use docdom::dom::{FindOptions, MemberOwner, SolutionModel, SolutionModelBuilder};
use docdom::metadata::{AssemblyMetadata, ReflectedMember, ReflectedType, TypeRef};
use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::model_assertions::*;

fn shapes() -> SolutionModel {
    SolutionModelBuilder::new(FindOptions::default())
        .assembly(shapes_assembly(), shapes_docs())
        .build()
        .unwrap()
}

#[test]
fn test_shapes_fixture_has_no_diagnostics() {
    let solution = shapes();
    assert_no_diagnostics(&solution);
    assert_eq!(solution.type_count(), 3);
}

#[test]
fn test_undocumented_override_inherits_base_doc() {
    let solution = shapes();
    let circle = expect_type(&solution, "Acme.Shapes.Circle");
    let area = expect_member(circle, "Area()");

    assert_eq!(summary(area), Some("Computes the area."));
    assert!(area.core().doc_inherited);
    assert!(area.inherited_from().is_none());

    let base = area.overrides().expect("Circle.Area overrides Shape.Area");
    match base.owner() {
        MemberOwner::Synthetic(owner) => assert_eq!(owner.full_name, "Acme.Shapes.Shape"),
        other => panic!("expected a synthetic owner, got {other:?}"),
    }
    assert!(base.overrides().is_none());
}

#[test]
fn test_inheritdoc_marker_replaced_and_params_rebound() {
    let solution = shapes();
    let circle = expect_type(&solution, "Acme.Shapes.Circle");
    let scale = expect_member(circle, "Scale(Double)");

    assert_eq!(summary(scale), Some("Scales the shape."));
    assert!(scale.core().doc_inherited);
    let factor = &scale.parameters()[0];
    assert_eq!(factor.name, "factor");
    assert_eq!(factor.doc.as_ref().map(|d| d.text.as_str()), Some("Scale factor."));
}

#[test]
fn test_grandchild_override_inherits_through_the_chain() {
    let solution = shapes();
    let ring = expect_type(&solution, "Acme.Shapes.Ring");
    let area = expect_member(ring, "Area()");
    assert_eq!(summary(area), Some("Computes the area."));
    assert!(area.core().doc_inherited);
}

#[test]
fn test_member_inherited_without_override() {
    let solution = shapes();
    let ring = expect_type(&solution, "Acme.Shapes.Ring");
    let scale = expect_member(ring, "Scale(Double)");

    assert_eq!(scale.inherited_from(), Some("Acme.Shapes.Circle"));
    assert!(scale.overrides().is_none());
    assert_eq!(scale.doc_id(), "M:Acme.Shapes.Circle.Scale(System.Double)");
}

#[test]
fn test_documented_base_member_untouched() {
    let solution = shapes();
    let shape = expect_type(&solution, "Acme.Shapes.Shape");
    for member in shape.members() {
        assert!(!member.core().doc_inherited);
        assert!(member.overrides().is_none());
        assert!(member.doc().is_some());
    }
}

fn undocumented_chain() -> AssemblyMetadata {
    let double = TypeRef::named("System.Double");
    let area = ReflectedMember::method("Acme.Bare.Shape", "Area", double.clone()).as_virtual();
    AssemblyMetadata::new("Acme.Bare")
        .with_type(ReflectedType::class("Acme.Bare.Shape").with_member(area.clone()))
        .with_type(
            ReflectedType::class("Acme.Bare.Circle")
                .with_base(TypeRef::named("Acme.Bare.Shape"))
                .with_member(
                    ReflectedMember::method("Acme.Bare.Circle", "Area", double)
                        .as_virtual()
                        .with_base_definition(area),
                ),
        )
}

fn bare_docs() -> DocComments {
    DocComments::new()
        .with_fragment(DocFragment::new("T:Acme.Bare.Shape").with_summary("A shape."))
        .with_fragment(DocFragment::new("T:Acme.Bare.Circle").with_summary("A circle."))
}

#[rstest]
#[case::default(FindOptions::default(), 0)]
#[case::undocumented_kept(FindOptions::default().with_undocumented_members(true), 1)]
fn test_override_with_nothing_to_inherit(#[case] options: FindOptions, #[case] expected: usize) {
    let solution = SolutionModelBuilder::new(options)
        .assembly(undocumented_chain(), bare_docs())
        .build()
        .unwrap();

    let circle = expect_type(&solution, "Acme.Bare.Circle");
    assert_eq!(circle.methods.len(), expected);
    assert_eq!(expect_type(&solution, "Acme.Bare.Shape").methods.len(), expected);
    for member in circle.members() {
        assert!(member.doc().is_none());
        assert!(!member.core().doc_inherited);
    }
}
