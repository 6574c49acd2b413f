//! Inclusion options for the documentation model.

use std::sync::Arc;

use super::member::MemberModel;

/// Caller-supplied member predicate, applied after the built-in visibility
/// filter (e.g. "only members changed since version X").
pub type MemberFilter = Arc<dyn Fn(&MemberModel) -> bool + Send + Sync>;

/// Controls which undocumented or non-public entities reach the model.
///
/// Every switch defaults to `false`: only documented, externally visible
/// types and members are included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default, rename_all = "camelCase"))]
pub struct FindOptions {
    /// Include types that have no documentation entry.
    pub undocumented_classes: bool,
    /// Include types that are not visible outside their assembly.
    pub internal_classes: bool,
    /// Include members that have no documentation entry.
    pub undocumented_members: bool,
    /// Include private and internal members.
    pub private_members: bool,
}

impl FindOptions {
    /// Include everything reflection reports.
    pub fn all() -> Self {
        Self {
            undocumented_classes: true,
            internal_classes: true,
            undocumented_members: true,
            private_members: true,
        }
    }

    pub fn with_undocumented_classes(mut self, value: bool) -> Self {
        self.undocumented_classes = value;
        self
    }

    pub fn with_internal_classes(mut self, value: bool) -> Self {
        self.internal_classes = value;
        self
    }

    pub fn with_undocumented_members(mut self, value: bool) -> Self {
        self.undocumented_members = value;
        self
    }

    pub fn with_private_members(mut self, value: bool) -> Self {
        self.private_members = value;
        self
    }

    /// Include undocumented types and members, but only public surface.
    pub fn public_surface() -> Self {
        Self::default()
            .with_undocumented_classes(true)
            .with_undocumented_members(true)
    }
}
