//! In-memory metadata snapshot.
//!
//! [`AssemblyMetadata`] owns the reflected shape of one assembly. It is what a
//! reflection dumper produces and what tests construct by hand. With the
//! `interchange` feature it round-trips through JSON:
//!
//! ```json
//! {
//!   "name": "Acme.Core",
//!   "types": [
//!     { "fullName": "Acme.Order", "members": [
//!         { "name": "Total", "declaringType": "Acme.Order", "kind": "property",
//!           "getter": { "visibility": "public" }, "setter": null,
//!           "propertyType": { "kind": "named", "fullName": "System.Decimal" },
//!           "indexParameters": [] } ] }
//!   ]
//! }
//! ```

use smol_str::SmolStr;

use super::MetadataSource;
use super::error::MetadataError;
use super::reflected::ReflectedType;

/// Reflected metadata of one assembly, held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct AssemblyMetadata {
    pub name: SmolStr,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub types: Vec<ReflectedType>,
}

impl AssemblyMetadata {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: ReflectedType) -> Self {
        self.types.push(ty);
        self
    }

    pub fn add_type(&mut self, ty: ReflectedType) {
        self.types.push(ty);
    }
}

impl MetadataSource for AssemblyMetadata {
    fn assembly_name(&self) -> &str {
        &self.name
    }

    fn load_types(&self) -> Result<Vec<ReflectedType>, MetadataError> {
        Ok(self.types.clone())
    }
}

// ============================================================================
// JSON snapshots
// ============================================================================

#[cfg(feature = "interchange")]
impl AssemblyMetadata {
    /// Decode a snapshot from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, MetadataError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read a snapshot from a JSON file.
    pub fn read_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, MetadataError> {
        let content = std::fs::read(path.as_ref())?;
        Self::from_json_slice(&content)
    }

    /// Write the snapshot as pretty JSON.
    pub fn write_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), MetadataError> {
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
