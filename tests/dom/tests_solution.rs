//! Solution-level properties of the builder.

use docdom::dom::{FindOptions, SolutionModel, SolutionModelBuilder, TypeKind};
use rstest::rstest;

use crate::helpers::fixtures::*;
use crate::helpers::model_assertions::*;

fn core_and_ext(options: FindOptions) -> SolutionModel {
    SolutionModelBuilder::new(options)
        .assembly(core_assembly(), core_docs())
        .assembly(ext_assembly(), ext_docs())
        .build()
        .expect("fixture solution builds")
}

// =============================================================================
// ROUND TRIP AND IDEMPOTENCE
// =============================================================================

#[test]
fn test_fully_documented_fixture_has_no_diagnostics() {
    let solution = core_and_ext(FindOptions::all());

    assert_no_diagnostics(&solution);
    assert_eq!(solution.assemblies().len(), 2);
    for ty in solution.types() {
        assert!(ty.doc.is_some(), "{} lost its documentation", ty.full_name);
    }
    let members = all_members(&solution);
    assert_eq!(members.len(), 12);
    for member in members {
        assert!(member.doc().is_some(), "{} lost its documentation", member.doc_id());
    }
}

#[test]
fn test_build_is_idempotent() {
    let first = core_and_ext(FindOptions::default());
    let second = core_and_ext(FindOptions::default());
    assert_eq!(first, second);
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_parallel_and_sequential_builds_agree(#[case] parallel: bool) {
    let reference = core_and_ext(FindOptions::default());
    let solution = SolutionModelBuilder::new(FindOptions::default())
        .assembly(core_assembly(), core_docs())
        .assembly(ext_assembly(), ext_docs())
        .parallel(parallel)
        .build()
        .unwrap();
    assert_eq!(solution, reference);
}

// =============================================================================
// TYPES AND MEMBERS
// =============================================================================

#[test]
fn test_overload_indices_follow_signature_order() {
    let solution = core_and_ext(FindOptions::default());
    let order = expect_type(&solution, "Acme.Core.Order");

    let indexed: Vec<_> = order
        .methods
        .iter()
        .map(|m| (m.short_signature(), m.overload_index()))
        .collect();
    assert_eq!(
        indexed,
        vec![
            ("Do()", Some(1)),
            ("Do(Int32)", Some(2)),
            ("Do(String)", Some(3)),
        ]
    );
}

#[test]
fn test_member_collections() {
    let solution = core_and_ext(FindOptions::default());

    let order = expect_type(&solution, "Acme.Core.Order");
    assert_eq!(order.kind, TypeKind::Class);
    assert_eq!(order.constructors[0].short_signature(), "Order(Int32)");
    assert_eq!(
        order.constructors[0].parameters()[0].doc.as_ref().unwrap().text,
        "Order number."
    );
    assert_eq!(order.properties[0].short_signature(), "Total");
    assert_eq!(order.events[0].short_signature(), "Changed");
    assert!(order.fields[0].is_static());
    assert!(order.operators.is_empty());

    let money = expect_type(&solution, "Acme.Core.Money");
    assert_eq!(money.kind, TypeKind::Struct);
    assert!(money.methods.is_empty());
    let operators: Vec<_> = money.operators.iter().map(|m| m.short_signature()).collect();
    assert_eq!(operators, vec!["Addition(Money, Money)", "Implicit(Money)"]);
    assert_eq!(
        summary(expect_member(money, "Implicit(Money)")),
        Some("Converts to decimal.")
    );
}

#[test]
fn test_generic_type_and_nested_type() {
    let solution = core_and_ext(FindOptions::default());

    let repository = expect_type(&solution, "Acme.Core.Repository`1");
    assert_eq!(repository.display_name(), "Repository<T>");
    assert_eq!(
        repository.generic_parameters[0].doc.as_ref().unwrap().text,
        "Item type."
    );
    let find = expect_member(repository, "Find(T)");
    assert_eq!(find.doc().unwrap().returns.as_deref(), Some("True when found."));

    let entry = expect_type(&solution, "Acme.Core.Repository`1+Entry");
    assert_eq!(entry.declaring_type, Some(repository.id));
    assert_eq!(repository.nested_types, vec![entry.id]);

    let core = solution.namespace("Acme.Core").unwrap();
    assert!(!core.types.contains(&entry.id));
}

// =============================================================================
// NAMESPACES
// =============================================================================

#[test]
fn test_namespace_merged_across_assemblies() {
    let solution = core_and_ext(FindOptions::default());

    let names: Vec<_> = solution.namespaces().iter().map(|ns| ns.name.as_str()).collect();
    assert_eq!(names, vec!["Acme.Core", "Acme.Ext"]);

    let core = solution.namespace("Acme.Core").unwrap();
    let types: Vec<_> = solution
        .namespace_types(core)
        .map(|t| (t.name.as_str(), t.assembly().0))
        .collect();
    assert_eq!(
        types,
        vec![
            ("Money", 0),
            ("Order", 0),
            ("OrderExtensions", 1),
            ("Repository", 0),
        ]
    );

    // Per-assembly namespaces stay unmerged.
    let ext = solution.assembly_named("Acme.Ext").unwrap();
    let ext_names: Vec<_> = ext.namespaces.iter().map(|ns| ns.name.as_str()).collect();
    assert_eq!(ext_names, vec!["Acme.Core", "Acme.Ext"]);
}

#[test]
fn test_namespace_docs_bound_by_exact_name() {
    let solution = SolutionModelBuilder::new(FindOptions::default())
        .assembly(core_assembly(), core_docs())
        .assembly(ext_assembly(), ext_docs())
        .namespace_docs(namespace_docs())
        .build()
        .unwrap();

    let core = solution.namespace("Acme.Core").unwrap();
    assert_eq!(
        core.doc.as_ref().unwrap().summary.as_deref(),
        Some("Core order types.")
    );
    let ext = solution.namespace("Acme.Ext").unwrap();
    assert_eq!(
        ext.doc.as_ref().unwrap().summary.as_deref(),
        Some("Extension helpers.")
    );
    assert_no_diagnostics(&solution);
}

// =============================================================================
// EXTENSION METHODS
// =============================================================================

#[test]
fn test_extension_method_attaches_across_assemblies() {
    let solution = core_and_ext(FindOptions::default());
    let order = expect_type(&solution, "Acme.Core.Order");

    assert_eq!(order.extension_methods.len(), 1);
    let describe: Vec<_> = solution.extension_methods(order.id).collect();
    assert_eq!(describe.len(), 1);
    assert_eq!(describe[0].short_signature(), "Describe(Order)");
    assert_eq!(describe[0].short_signature_as_extension(), "Describe()");

    let owner = describe[0].owner().type_id().unwrap();
    assert_eq!(
        solution.type_model(owner).unwrap().full_name,
        "Acme.Core.OrderExtensions"
    );
    assert_eq!(owner.assembly.0, 1);

    // Nothing else picked it up.
    let attached: usize = solution.types().map(|t| t.extension_methods.len()).sum();
    assert_eq!(attached, 1);
}

#[test]
fn test_extension_target_outside_solution_is_ignored() {
    let solution = SolutionModelBuilder::new(FindOptions::default())
        .assembly(ext_assembly(), ext_docs())
        .build()
        .unwrap();
    assert!(solution.types().all(|t| t.extension_methods.is_empty()));
}
