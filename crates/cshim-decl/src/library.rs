//! Library declaration manifest (`.shim.toml`) parsing.
//!
//! A `.shim.toml` manifest is produced by the external declaration extractor
//! and describes one original C++ library: the include directives that make
//! its declarations visible, and the destructible types that need a C-callable
//! destructor thunk.

use serde::{Deserialize, Serialize};

use crate::error::{DeclError, Result};
use crate::name::{is_identifier, QualifiedName};

/// A complete library manifest parsed from a `.shim.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryManifest {
    /// Metadata about the original library.
    pub library: Library,
    /// The destructible types found in the library's declarations.
    #[serde(default, rename = "types")]
    pub types: Vec<TypeRecord>,
}

/// Metadata about the original library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    /// Library name; prefixes every generated symbol and the include guard,
    /// so it must be a valid C identifier.
    pub name: String,
    /// Ordered include paths required to see the original declarations.
    /// Order is preserved through generation.
    #[serde(default)]
    pub includes: Vec<String>,
}

/// Destructor access as observed by the declaration extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestructorAccess {
    Public,
    Protected,
    Private,
    Deleted,
}

impl DestructorAccess {
    /// Lowercase name as it appears in manifests and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DestructorAccess::Public => "public",
            DestructorAccess::Protected => "protected",
            DestructorAccess::Private => "private",
            DestructorAccess::Deleted => "deleted",
        }
    }
}

/// How instances of a type are owned across the boundary, which selects the
/// destructor thunk flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// Caller-provided storage; the thunk runs the destructor in place.
    #[default]
    Buffer,
    /// Heap allocation made by the shim; the thunk deletes the object.
    Heap,
}

/// A single destructible type record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Fully-qualified C++ type name.
    pub name: QualifiedName,
    /// Destructor access; only `public` destructors can be thunked.
    #[serde(default = "default_access")]
    pub destructor: DestructorAccess,
    /// Ownership model for instances crossing the boundary.
    #[serde(default)]
    pub ownership: Ownership,
    /// Whether this type is excluded from generation.
    #[serde(default)]
    pub excluded: bool,
}

fn default_access() -> DestructorAccess {
    DestructorAccess::Public
}

impl LibraryManifest {
    /// Parse a library manifest from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let manifest: LibraryManifest = toml::from_str(input).map_err(DeclError::Toml)?;

        if !is_identifier(&manifest.library.name) {
            return Err(DeclError::InvalidManifest {
                detail: format!(
                    "library.name '{}' is not a valid C identifier",
                    manifest.library.name
                ),
            });
        }
        for include in &manifest.library.includes {
            validate_include(include)?;
        }

        Ok(manifest)
    }

    /// Parse a library manifest from a file path.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Return only the non-excluded type records.
    pub fn active_types(&self) -> Vec<&TypeRecord> {
        self.types.iter().filter(|t| !t.excluded).collect()
    }
}

/// Check that an include path cannot break out of an `#include "..."` line.
pub fn validate_include(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(DeclError::InvalidInclude {
            detail: "empty include path".to_string(),
        });
    }
    if let Some(bad) = path
        .chars()
        .find(|c| c.is_control() || matches!(c, '"' | '<' | '>' | '\\'))
    {
        return Err(DeclError::InvalidInclude {
            detail: format!("character {bad:?} in '{}'", path.escape_default()),
        });
    }
    Ok(())
}
