//! Shared helpers for architecture tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .expect("architecture-tests lives at crates/architecture-tests")
}

/// Every `.rs` file under `crates/`, skipping build output and this crate.
pub fn workspace_rust_files() -> Vec<PathBuf> {
    rust_files_under(&workspace_root().join("crates"))
}

/// Every `.rs` file under `dir`, skipping build output and this crate.
pub fn rust_files_under(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}
