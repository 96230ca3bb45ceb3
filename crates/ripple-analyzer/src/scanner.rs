//! Filesystem scanning collaborator
//!
//! Walks a project root and produces the canonical-path → content mapping the
//! builder consumes. Unreadable or non-UTF-8 files are logged and omitted;
//! they never surface as errors to the analysis core.

use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::path::Path;

/// Extensions collected into the file mapping. Anything else cannot carry
/// imports and cannot be a resolution target, so it is skipped at the walk.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs", "py", "pyi"];

/// Read all source files under `root` into a map keyed by `/`-separated
/// root-relative paths. Respects .gitignore and skips hidden entries.
pub fn scan_project(root: &Path) -> anyhow::Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping walk entry: {err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SOURCE_EXTENSIONS.contains(&extension) {
            continue;
        }

        let key = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        match std::fs::read_to_string(path) {
            Ok(content) => {
                files.insert(key, content);
            }
            Err(err) => {
                tracing::warn!("skipping unreadable file {}: {err}", path.display());
            }
        }
    }

    tracing::debug!("scanned {} source files", files.len());
    Ok(files)
}
