//! Ripple Core — diff parsing, dependency graph model, and reachability queries

pub mod cache;
pub mod diff;
pub mod model;
pub mod paths;
pub mod reach;


#[cfg(test)]
pub mod test_utils;

pub use cache::{CACHE_DIR, CacheError, GRAPH_CACHE, cache_dir, clear_cache, ensure_cache_dir, graph_cache_path, load_graph, save_graph};
pub use diff::{DiffParser, parse_diff};
pub use model::{ChangeType, DependencyGraph, DiffHunk, ExportKind, ExportRecord, Family, FileDiff, GraphMetadata, GraphNode, ImportRecord, Language};
pub use reach::{AffectedFiles, DEFAULT_MAX_DEPTH, affected_files, find_dependencies, find_dependents, find_related_tests};
