//! Graph cache wire format and persistence
//!
//! The wire format is the serde shape of [`DependencyGraph`] itself: a JSON
//! object with `nodes` (canonical path → node) and `metadata` (ISO-8601 build
//! timestamp, root, file count). Round-tripping reproduces an equal graph.

use crate::model::DependencyGraph;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cache directory: .ripple/
pub const CACHE_DIR: &str = ".ripple";

/// Graph cache file
pub const GRAPH_CACHE: &str = "graph.json";

/// Failures persisting or restoring a cached graph.
///
/// These cover the cache file itself only; content-level analysis never
/// produces errors.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Get cache directory path
pub fn cache_dir(root: &Path) -> PathBuf {
    root.join(CACHE_DIR)
}

/// Get graph cache file path
pub fn graph_cache_path(root: &Path) -> PathBuf {
    root.join(CACHE_DIR).join(GRAPH_CACHE)
}

/// Ensure cache directory exists
pub fn ensure_cache_dir(root: &Path) -> std::io::Result<()> {
    let cache = cache_dir(root);
    if !cache.exists() {
        std::fs::create_dir_all(&cache)?;
    }
    Ok(())
}

/// Serialize a graph to the JSON wire format.
pub fn to_json(graph: &DependencyGraph) -> Result<String, CacheError> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Deserialize a graph from the JSON wire format.
pub fn from_json(text: &str) -> Result<DependencyGraph, CacheError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize the graph into the cache file under `root`.
pub fn save_graph(graph: &DependencyGraph, root: &Path) -> Result<(), CacheError> {
    ensure_cache_dir(root)?;
    let path = graph_cache_path(root);
    std::fs::write(&path, to_json(graph)?)?;
    tracing::debug!("graph cache saved: {}", path.display());
    Ok(())
}

/// Load a previously cached graph, if one exists.
pub fn load_graph(root: &Path) -> Result<Option<DependencyGraph>, CacheError> {
    let path = graph_cache_path(root);
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path)?;
    let graph = from_json(&text)?;
    tracing::debug!("graph cache loaded from: {}", path.display());
    Ok(Some(graph))
}

/// Clear cache directory
pub fn clear_cache(root: &Path) -> std::io::Result<()> {
    let cache = cache_dir(root);
    if cache.exists() {
        std::fs::remove_dir_all(&cache)?;
    }
    Ok(())
}
