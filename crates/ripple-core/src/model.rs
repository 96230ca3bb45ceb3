//! Core data structures for diffs, imports, and the dependency graph

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Classification of how a file changed in a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
    Renamed,
}

/// One contiguous block of changed lines in a unified diff.
///
/// `content` holds every line of the hunk with its diff prefix preserved;
/// `additions` and `deletions` hold the same lines de-prefixed. Context lines
/// appear in `content` only, so every content line is accounted for by
/// additions + deletions + context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    pub old_start: u32,
    pub old_lines: u32,
    pub new_start: u32,
    pub new_lines: u32,
    pub content: Vec<String>,
    pub additions: Vec<String>,
    pub deletions: Vec<String>,
}

impl DiffHunk {
    /// Number of context lines (content lines that are neither additions nor
    /// deletions).
    pub fn context_count(&self) -> usize {
        self.content.len() - self.additions.len() - self.deletions.len()
    }
}

/// All changes to a single file parsed out of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    pub path: String,
    pub change_type: ChangeType,
    /// Previous path, present only for renames.
    pub old_path: Option<String>,
    pub hunks: Vec<DiffHunk>,
}

impl FileDiff {
    /// Total added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks.iter().map(|h| h.additions.len()).sum()
    }

    /// Total deleted lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks.iter().map(|h| h.deletions.len()).sum()
    }
}

/// One import declaration extracted from source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// The module specifier as written in the source.
    pub specifier: String,
    /// Named bindings with aliases resolved to their local names.
    pub named: Vec<String>,
    /// Default (or namespace) binding name, if any.
    pub default_binding: Option<String>,
    /// True for type-only imports (brace family only).
    pub type_only: bool,
    /// True iff the specifier points inside the project rather than at an
    /// external package.
    pub is_relative: bool,
}

/// Shape of an export declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Named,
    Default,
    ReExport,
}

/// One export declaration extracted from source text (brace family only).
///
/// Kept for data-model completeness; the dependency graph does not consume
/// exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub kind: ExportKind,
    pub names: Vec<String>,
    /// Source module for re-exports.
    pub source: Option<String>,
}

/// Lexical family a language belongs to for import recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Brace-delimited import syntax (TypeScript/JavaScript).
    Brace,
    /// Indentation-based import syntax (Python).
    Indent,
}

/// Languages recognized for import extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Other,
}

impl Language {
    /// Detect language from a canonical path's extension.
    pub fn from_path(path: &str) -> Self {
        let basename = path.rsplit('/').next().unwrap_or(path);
        match basename.rsplit('.').next() {
            Some("ts") | Some("tsx") => Language::TypeScript,
            Some("js") | Some("jsx") | Some("mjs") | Some("cjs") => Language::JavaScript,
            Some("py") | Some("pyi") => Language::Python,
            _ => Language::Other,
        }
    }

    /// The lexical family this language's imports follow, if recognized.
    pub fn family(self) -> Option<Family> {
        match self {
            Language::TypeScript | Language::JavaScript => Some(Family::Brace),
            Language::Python => Some(Family::Indent),
            Language::Other => None,
        }
    }
}

/// A single file in the dependency graph.
///
/// Edges are stored as ordered, deduplicated adjacency lists in both
/// directions: for every target in `imports` of node A, node B's
/// `imported_by` contains A (when B has a node at all). A node never lists
/// itself in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub path: String,
    /// Resolved project-file import targets, first-seen order.
    pub imports: Vec<String>,
    /// Paths of files importing this one, edge-discovery order.
    pub imported_by: Vec<String>,
    /// Unique external package names imported by this file.
    pub external_packages: Vec<String>,
    pub language: Language,
}

impl GraphNode {
    pub fn new(path: impl Into<String>, language: Language) -> Self {
        GraphNode {
            path: path.into(),
            imports: Vec::new(),
            imported_by: Vec::new(),
            external_packages: Vec::new(),
            language,
        }
    }
}

/// Build information recorded alongside the node map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// ISO-8601 build timestamp.
    pub built_at: String,
    /// Project root the graph was built from.
    pub root: String,
    /// Number of nodes in the graph.
    pub file_count: usize,
}

/// The bidirectional import graph over project files.
///
/// Nodes live in a flat arena keyed by canonical path; cycles are expressed
/// purely through those keys, never through references between nodes. After
/// construction the graph is treated as read-only and can be shared freely
/// for concurrent queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: HashMap<String, GraphNode>,
    pub metadata: GraphMetadata,
}

impl DependencyGraph {
    /// Get a node by canonical path.
    pub fn node(&self, path: &str) -> Option<&GraphNode> {
        self.nodes.get(path)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of import edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.imports.len()).sum()
    }
}
