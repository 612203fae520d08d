//! Per-library shim assembly.
//!
//! Orchestrates the export policy, thunk generator, and renderer for one
//! library: resolve the platform once, deduplicate the destructible-type set
//! in first-seen order, generate one thunk per distinct type, and render the
//! header. A single-pass, side-effect-free transform — writing the artifacts
//! to storage belongs to the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use cshim_decl::LibraryManifest;

use crate::error::{GenError, Result};
use crate::platform::Platform;
use crate::render::{render, HeaderTemplate};
use crate::symbol::{CallingConvention, ExportedSymbol, SymbolTable, Visibility};
use crate::thunk::{generate_thunk, DestructorThunk};

/// What to do when a type has no public destructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndestructiblePolicy {
    /// Exclude the type from the exported surface and record it in the
    /// report; generation of the library continues.
    #[default]
    Skip,
    /// Abort generation of the whole library.
    Fail,
}

/// Options for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct ShimOptions {
    /// Target platform, resolved once for the whole run.
    pub platform: Platform,
    /// Policy for types without a public destructor.
    pub on_undestructible: UndestructiblePolicy,
}

/// The final header artifact for one library. Immutable after assembly.
#[derive(Debug, Clone)]
pub struct GeneratedHeader {
    /// Library name.
    pub library: String,
    /// Complete header text.
    pub text: String,
    /// The exported C-callable surface, for the binding generator.
    pub symbols: SymbolTable,
}

/// A type excluded from the exported surface, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedType {
    pub name: String,
    pub reason: String,
}

/// Summary of one library's generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub library: String,
    pub platform: Platform,
    pub thunk_count: usize,
    pub skipped: Vec<SkippedType>,
}

/// Header plus report for one library.
#[derive(Debug, Clone)]
pub struct ShimOutput {
    pub header: GeneratedHeader,
    pub report: GenerationReport,
}

/// Assemble the shim header for one library.
///
/// Duplicate type records are deduplicated here (first occurrence wins)
/// before the thunk generator runs, since duplicate function definitions are
/// a compile-time fatal error in the emitted header. Distinct type spellings
/// that flatten to the same C symbol are not recoverable and surface as
/// [`GenError::DuplicateSymbol`].
pub fn assemble_header(manifest: &LibraryManifest, options: &ShimOptions) -> Result<ShimOutput> {
    let library = manifest.library.name.as_str();

    let mut seen = HashSet::new();
    let mut thunks: Vec<DestructorThunk> = Vec::new();
    let mut symbols = SymbolTable::new();
    let mut skipped = Vec::new();

    for record in manifest.active_types() {
        if !seen.insert(&record.name) {
            continue;
        }
        let thunk = match generate_thunk(library, record) {
            Ok(thunk) => thunk,
            Err(err @ GenError::UndestructibleType { .. }) => match options.on_undestructible {
                UndestructiblePolicy::Fail => return Err(err),
                UndestructiblePolicy::Skip => {
                    skipped.push(SkippedType {
                        name: record.name.to_string(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            },
            Err(err) => return Err(err),
        };
        symbols.insert(ExportedSymbol {
            name: thunk.symbol.clone(),
            convention: CallingConvention::C,
            visibility: Visibility::Exported,
        })?;
        thunks.push(thunk);
    }

    let text = render(&HeaderTemplate {
        library,
        includes: &manifest.library.includes,
        platform: options.platform,
        thunks: &thunks,
    })?;

    let report = GenerationReport {
        library: library.to_string(),
        platform: options.platform,
        thunk_count: thunks.len(),
        skipped,
    };

    Ok(ShimOutput {
        header: GeneratedHeader {
            library: library.to_string(),
            text,
            symbols,
        },
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(platform: Platform) -> ShimOptions {
        ShimOptions {
            platform,
            on_undestructible: UndestructiblePolicy::Skip,
        }
    }

    fn manifest(toml: &str) -> LibraryManifest {
        LibraryManifest::parse(toml).unwrap()
    }

    #[test]
    fn end_to_end_scenario() {
        let m = manifest(
            r#"
[library]
name = "mylib"
includes = ["mylib/widget.hpp"]

[[types]]
name = "ns::Widget"
"#,
        );
        let out = assemble_header(&m, &options(Platform::PosixLike)).unwrap();

        assert_eq!(out.header.library, "mylib");
        assert_eq!(out.report.thunk_count, 1);
        assert!(out.report.skipped.is_empty());
        assert_eq!(
            out.header.symbols.names().collect::<Vec<_>>(),
            vec!["mylib_c_ns_Widget_destructor"]
        );
        assert!(out.header.text.contains("#include \"mylib/widget.hpp\""));
        assert!(out.header.text.contains("#define CSHIM_EXPORT\n"));
        assert!(out
            .header
            .text
            .contains("cshim_call_destructor(reinterpret_cast<ns::Widget*>(ptr));"));
    }

    #[test]
    fn duplicate_type_records_deduplicated_first_seen() {
        let m = manifest(
            r#"
[library]
name = "mylib"

[[types]]
name = "B"

[[types]]
name = "A"

[[types]]
name = "B"
"#,
        );
        let out = assemble_header(&m, &options(Platform::PosixLike)).unwrap();
        assert_eq!(
            out.header.symbols.names().collect::<Vec<_>>(),
            vec!["mylib_c_B_destructor", "mylib_c_A_destructor"]
        );
        assert_eq!(out.report.thunk_count, 2);
    }

    #[test]
    fn skip_policy_excludes_and_reports() {
        let m = manifest(
            r#"
[library]
name = "mylib"

[[types]]
name = "Open"

[[types]]
name = "Locked"
destructor = "private"
"#,
        );
        let out = assemble_header(&m, &options(Platform::PosixLike)).unwrap();
        assert_eq!(out.report.thunk_count, 1);
        assert_eq!(out.report.skipped.len(), 1);
        assert_eq!(out.report.skipped[0].name, "Locked");
        assert!(out.report.skipped[0].reason.contains("private"));
        assert!(!out.header.text.contains("Locked"));
        assert!(!out.header.symbols.contains("mylib_c_Locked_destructor"));
    }

    #[test]
    fn fail_policy_aborts_library() {
        let m = manifest(
            r#"
[library]
name = "mylib"

[[types]]
name = "Locked"
destructor = "deleted"
"#,
        );
        let opts = ShimOptions {
            platform: Platform::PosixLike,
            on_undestructible: UndestructiblePolicy::Fail,
        };
        let err = assemble_header(&m, &opts).unwrap_err();
        assert!(matches!(err, GenError::UndestructibleType { .. }));
    }

    #[test]
    fn flattening_collision_is_a_hard_error() {
        // Distinct spellings, same flat C name.
        let m = manifest(
            r#"
[library]
name = "mylib"

[[types]]
name = "a::b_c"

[[types]]
name = "a_b::c"
"#,
        );
        let err = assemble_header(&m, &options(Platform::PosixLike)).unwrap_err();
        assert!(matches!(
            err,
            GenError::DuplicateSymbol { name } if name == "mylib_c_a_b_c_destructor"
        ));
    }

    #[test]
    fn heap_ownership_gets_delete_thunk() {
        let m = manifest(
            r#"
[library]
name = "mylib"

[[types]]
name = "ns::Painter"
ownership = "heap"
"#,
        );
        let out = assemble_header(&m, &options(Platform::PosixLike)).unwrap();
        assert_eq!(
            out.header.symbols.names().collect::<Vec<_>>(),
            vec!["mylib_c_ns_Painter_delete"]
        );
        assert!(out
            .header
            .text
            .contains("delete reinterpret_cast<ns::Painter*>(ptr);"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let toml = r#"
[library]
name = "mylib"
includes = ["b.hpp", "a.hpp"]

[[types]]
name = "ns::Widget"

[[types]]
name = "Plain"
"#;
        let first = assemble_header(&manifest(toml), &options(Platform::WindowsLike)).unwrap();
        let second = assemble_header(&manifest(toml), &options(Platform::WindowsLike)).unwrap();
        assert_eq!(first.header.text, second.header.text);
    }

    #[test]
    fn compilability_invariant_samples() {
        // Trivial struct, nested-scope class, and a type with no public
        // destructor: the first two get compiling thunks, the third is
        // excluded under the documented default policy.
        let m = manifest(
            r#"
[library]
name = "samples"

[[types]]
name = "Plain"

[[types]]
name = "outer::Inner"

[[types]]
name = "Hidden"
destructor = "private"
"#,
        );
        let out = assemble_header(&m, &options(Platform::PosixLike)).unwrap();
        assert_eq!(out.report.thunk_count, 2);
        assert_eq!(
            out.header.symbols.names().collect::<Vec<_>>(),
            vec![
                "samples_c_Plain_destructor",
                "samples_c_outer_Inner_destructor"
            ]
        );
        assert_eq!(out.report.skipped.len(), 1);
    }
}
