//! Documentation fragments.
//!
//! A [`DocFragment`] is one `<member>` entry of an XML documentation file.
//! Section text is kept as the raw inner XML (trimmed) so renderers can still
//! resolve `<see cref="..."/>` and friends.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

// ============================================================================
// DOC ID KINDS
// ============================================================================

/// Prefix of a doc-comment ID (`T:`, `M:`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocIdKind {
    Namespace,
    Type,
    Method,
    Property,
    Field,
    Event,
    /// `!:` entries the compiler could not resolve.
    Error,
}

impl DocIdKind {
    /// Classify a doc-comment ID by its prefix.
    pub fn of(key: &str) -> Option<DocIdKind> {
        let (prefix, _) = key.split_once(':')?;
        match prefix {
            "N" => Some(DocIdKind::Namespace),
            "T" => Some(DocIdKind::Type),
            "M" => Some(DocIdKind::Method),
            "P" => Some(DocIdKind::Property),
            "F" => Some(DocIdKind::Field),
            "E" => Some(DocIdKind::Event),
            "!" => Some(DocIdKind::Error),
            _ => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            DocIdKind::Namespace => "N:",
            DocIdKind::Type => "T:",
            DocIdKind::Method => "M:",
            DocIdKind::Property => "P:",
            DocIdKind::Field => "F:",
            DocIdKind::Event => "E:",
            DocIdKind::Error => "!:",
        }
    }

    pub fn is_member(self) -> bool {
        matches!(
            self,
            DocIdKind::Method | DocIdKind::Property | DocIdKind::Field | DocIdKind::Event
        )
    }
}

// ============================================================================
// FRAGMENTS
// ============================================================================

/// A named sub-entry: `<param name="x">` or `<typeparam name="T">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocParam {
    pub name: SmolStr,
    pub text: String,
}

/// An `<exception cref="...">` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocException {
    pub cref: SmolStr,
    pub text: String,
}

/// One `<member>` entry of a documentation file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocFragment {
    /// The doc-comment ID the entry is keyed by.
    pub key: SmolStr,
    pub summary: Option<String>,
    pub remarks: Option<String>,
    pub returns: Option<String>,
    pub value: Option<String>,
    pub example: Option<String>,
    pub params: Vec<DocParam>,
    pub type_params: Vec<DocParam>,
    pub exceptions: Vec<DocException>,
    pub see_also: Vec<SmolStr>,
    /// The entry asks to inherit documentation (`<inheritdoc/>`).
    pub inherit_doc: bool,
    /// Any other top-level section, in document order.
    pub other: Vec<(SmolStr, String)>,
}

impl DocFragment {
    pub fn new(key: impl Into<SmolStr>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> Option<DocIdKind> {
        DocIdKind::of(&self.key)
    }

    /// The `<param>` entry whose `name` attribute equals `name`.
    pub fn param(&self, name: &str) -> Option<&DocParam> {
        self.params.iter().find(|p| p.name == name)
    }

    /// The `<typeparam>` entry whose `name` attribute equals `name`.
    pub fn type_param(&self, name: &str) -> Option<&DocParam> {
        self.type_params.iter().find(|p| p.name == name)
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        self.params.push(DocParam {
            name: name.into(),
            text: text.into(),
        });
        self
    }

    pub fn with_type_param(mut self, name: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        self.type_params.push(DocParam {
            name: name.into(),
            text: text.into(),
        });
        self
    }
}

// ============================================================================
// DOC COMMENTS (one file)
// ============================================================================

/// All fragments read from one documentation file, keyed by doc-comment ID.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocComments {
    /// Assembly name declared in the file header, if present.
    pub assembly_name: Option<SmolStr>,
    fragments: IndexMap<SmolStr, Arc<DocFragment>>,
}

impl DocComments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment. A later entry with the same key replaces the earlier one.
    pub fn insert(&mut self, fragment: DocFragment) {
        self.fragments
            .insert(fragment.key.clone(), Arc::new(fragment));
    }

    pub fn with_fragment(mut self, fragment: DocFragment) -> Self {
        self.insert(fragment);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Arc<DocFragment>> {
        self.fragments.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fragments.contains_key(key)
    }

    /// Fragments in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DocFragment>> {
        self.fragments.values()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
