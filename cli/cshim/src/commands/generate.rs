//! `cshim generate` — produce shim headers and symbol tables.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use cshim_decl::LibraryManifest;
use cshim_gen::{assemble_header, Platform, ShimOptions, ShimOutput, UndestructiblePolicy};

/// Generate one header and symbol table per manifest.
///
/// Libraries are independent: a failure in one manifest is reported and the
/// rest of the batch continues. The exit is nonzero if any library failed.
pub fn run(
    manifests: &[PathBuf],
    platform: &str,
    out_dir: &Path,
    on_undestructible: UndestructiblePolicy,
) -> Result<()> {
    // Resolve the platform once for the whole run; an unknown discriminator
    // aborts before any output is produced.
    let platform: Platform = platform
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let options = ShimOptions {
        platform,
        on_undestructible,
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut failed = Vec::new();
    for path in manifests {
        if let Err(e) = generate_one(path, out_dir, &options) {
            eprintln!("error: {}: {e:#}", path.display());
            failed.push(path);
        }
    }

    if !failed.is_empty() {
        bail!(
            "generation failed for {} of {} manifests",
            failed.len(),
            manifests.len()
        );
    }
    Ok(())
}

/// Generate the artifacts for a single library manifest.
fn generate_one(manifest_path: &Path, out_dir: &Path, options: &ShimOptions) -> Result<()> {
    let manifest = LibraryManifest::load(manifest_path)
        .with_context(|| format!("loading {}", manifest_path.display()))?;

    let ShimOutput { header, report } =
        assemble_header(&manifest, options).map_err(|e| anyhow::anyhow!("{e}"))?;

    let header_path = out_dir.join(format!("{}_global.h", header.library));
    fs::write(&header_path, &header.text)
        .with_context(|| format!("writing {}", header_path.display()))?;

    let symbols_path = out_dir.join(format!("{}.symbols.json", header.library));
    let symbols_json = serde_json::to_string_pretty(&header.symbols)?;
    fs::write(&symbols_path, symbols_json + "\n")
        .with_context(|| format!("writing {}", symbols_path.display()))?;

    println!(
        "Generated shim for '{}' ({} thunks, {}) → {}",
        report.library,
        report.thunk_count,
        report.platform,
        header_path.display()
    );
    for skipped in &report.skipped {
        println!("  warning: skipped {}: {}", skipped.name, skipped.reason);
    }

    Ok(())
}
