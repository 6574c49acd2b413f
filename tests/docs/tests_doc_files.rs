//! Documentation files read from disk.

use std::fs;

use docdom::docs::{DocCommentSource, XmlDocFile};
use docdom::dom::{Diagnostic, FindOptions, SolutionModelBuilder};
use tempfile::TempDir;

use crate::helpers::fixtures::*;
use crate::helpers::model_assertions::*;

#[test]
fn test_doc_file_read_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Acme.Core.xml");
    fs::write(&path, CORE_DOCS).unwrap();

    let docs = XmlDocFile::from_path(&path);
    assert_eq!(docs.label(), path.display().to_string());
    let loaded = docs.load().unwrap();
    assert_eq!(loaded.assembly_name.as_deref(), Some("Acme.Core"));

    let solution = SolutionModelBuilder::new(FindOptions::default())
        .assembly(core_assembly(), docs)
        .build()
        .unwrap();
    assert_no_diagnostics(&solution);
    assert_eq!(
        summary(expect_member(expect_type(&solution, "Acme.Core.Order"), "Do()")),
        Some("Does it.")
    );
}

#[test]
fn test_missing_doc_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Missing.xml");

    let solution = SolutionModelBuilder::new(FindOptions::public_surface())
        .assembly(core_assembly(), XmlDocFile::from_path(&path))
        .build()
        .unwrap();

    assert_eq!(solution.diagnostics().len(), 1);
    match &solution.diagnostics()[0] {
        Diagnostic::DocFileSkipped { assembly, file, .. } => {
            assert_eq!(assembly.as_deref(), Some("Acme.Core"));
            assert_eq!(*file, path.display().to_string());
        }
        other => panic!("expected a skipped doc file, got {other}"),
    }
    // The assembly is still modelled, just without prose.
    assert_eq!(solution.type_count(), 4);
    assert!(solution.types().all(|t| t.doc.is_none()));
}

#[test]
fn test_namespace_doc_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("namespaces.xml");
    fs::write(&path, NAMESPACE_DOCS).unwrap();

    let solution = SolutionModelBuilder::new(FindOptions::default())
        .assembly(core_assembly(), core_docs())
        .namespace_docs(XmlDocFile::from_path(&path))
        .build()
        .unwrap();
    let core = solution.namespace("Acme.Core").unwrap();
    assert_eq!(
        core.doc.as_ref().and_then(|d| d.summary.as_deref()),
        Some("Core order types.")
    );
}
