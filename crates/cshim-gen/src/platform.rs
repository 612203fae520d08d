//! Per-platform export annotation policy.
//!
//! The platform discriminator is resolved once per generation run into a
//! single macro definition, so every exported symbol carries the same
//! annotation and the emitted header is platform-pure — no `#ifdef` survives
//! into the artifact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Name of the export macro prepended to every generated declaration.
/// Part of the stable contract with downstream build tooling.
pub const EXPORT_MACRO: &str = "CSHIM_EXPORT";

/// Target platform discriminator — a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Platforms requiring an explicit dynamic-library export marking.
    WindowsLike,
    /// Platforms where default visibility satisfies cross-boundary linkage.
    PosixLike,
}

impl Platform {
    /// Canonical discriminator string.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::WindowsLike => "windows-like",
            Platform::PosixLike => "posix-like",
        }
    }

    /// What the export macro expands to on this platform.
    pub fn export_expansion(&self) -> &'static str {
        match self {
            Platform::WindowsLike => "__declspec(dllexport)",
            Platform::PosixLike => "",
        }
    }

    /// The `#define` block resolving the export macro for this platform.
    pub fn export_macro_block(&self) -> String {
        let expansion = self.export_expansion();
        if expansion.is_empty() {
            format!("#define {EXPORT_MACRO}\n")
        } else {
            format!("#define {EXPORT_MACRO} {expansion}\n")
        }
    }

    /// The annotation token prepended to each generated declaration.
    pub fn export_annotation(&self) -> &'static str {
        EXPORT_MACRO
    }
}

impl FromStr for Platform {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows-like" | "windows" => Ok(Platform::WindowsLike),
            "posix-like" | "posix" => Ok(Platform::PosixLike),
            other => Err(GenError::UnknownPlatform {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
