//! XML documentation comments.
//!
//! One documentation file yields a flat collection of [`DocFragment`]s keyed
//! by doc-comment ID. The builder pairs reflected symbols with fragments by
//! computing the same ID from the reflected shape ([`doc_id`]).
//!
//! ## Key Types
//!
//! - [`DocCommentSource`] - One documentation file, loaded on demand
//! - [`XmlDocFile`] - quick-xml reader of the compiler doc-file schema
//! - [`DocComments`] - Fragments of one file, in document order
//! - [`DocFragment`] - One `<member>` entry

pub mod doc_id;
mod error;
mod fragment;
mod xml;

use std::sync::Arc;

pub use error::DocError;
pub use fragment::{DocComments, DocException, DocFragment, DocIdKind, DocParam};
pub use xml::{XmlDocFile, parse_doc_xml};

/// One documentation file.
pub trait DocCommentSource: Send + Sync {
    /// Label used in diagnostics (usually the file path).
    fn label(&self) -> String;

    /// Read and parse the file.
    fn load(&self) -> Result<DocComments, DocError>;
}

impl DocCommentSource for DocComments {
    fn label(&self) -> String {
        match &self.assembly_name {
            Some(name) => format!("<in-memory docs for {name}>"),
            None => "<in-memory docs>".to_string(),
        }
    }

    fn load(&self) -> Result<DocComments, DocError> {
        Ok(self.clone())
    }
}

impl<T: DocCommentSource + ?Sized> DocCommentSource for Box<T> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn load(&self) -> Result<DocComments, DocError> {
        (**self).load()
    }
}

impl<T: DocCommentSource + ?Sized> DocCommentSource for Arc<T> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn load(&self) -> Result<DocComments, DocError> {
        (**self).load()
    }
}

impl DocComments {
    /// Prose for a namespace: an `N:Name` entry, or a bare `Name` entry.
    pub fn namespace_doc(&self, namespace: &str) -> Option<&Arc<DocFragment>> {
        self.get(&doc_id::namespace_doc_id(namespace))
            .or_else(|| self.get(namespace))
    }
}
