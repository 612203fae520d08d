//! `cshim check` — validate declaration manifests without generating.

use std::path::PathBuf;

use anyhow::{bail, Result};

use cshim_decl::LibraryManifest;

/// Parse and validate each manifest, reporting per-library results.
pub fn run(manifests: &[PathBuf]) -> Result<()> {
    let mut failed = 0usize;
    for path in manifests {
        match LibraryManifest::load(path) {
            Ok(manifest) => {
                println!(
                    "ok: {} ({} types, {} includes)",
                    manifest.library.name,
                    manifest.active_types().len(),
                    manifest.library.includes.len()
                );
            }
            Err(e) => {
                eprintln!("error: {}: {e}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} manifests invalid", manifests.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn check_accepts_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.shim.toml");
        fs::write(
            &path,
            "[library]\nname = \"mylib\"\nincludes = [\"a.hpp\"]\n\n[[types]]\nname = \"A\"\n",
        )
        .unwrap();
        run(&[path]).unwrap();
    }

    #[test]
    fn check_rejects_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.shim.toml");
        fs::write(&path, "[library]\nname = \"bad name\"\n").unwrap();
        assert!(run(&[path]).is_err());
    }
}
