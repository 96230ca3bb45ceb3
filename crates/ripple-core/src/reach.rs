//! Breadth-first reachability queries over a built dependency graph
//!
//! All queries allocate their queue and visited set per call, so a shared
//! read-only graph can serve concurrent queries. Traversal is iterative BFS
//! with a global visited set, which bounds stack usage and terminates on
//! cyclic graphs.

use crate::model::{DependencyGraph, GraphNode};
use crate::paths::{file_stem, normalize_path, strip_extension};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Depth limit used when a query does not specify one.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Files affected by a set of changed paths.
///
/// A path is classified as direct or transitive, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedFiles {
    /// The changed set itself.
    pub directly_affected: Vec<String>,
    /// Dependents of the changed set that are not themselves changed.
    pub transitively_affected: Vec<String>,
    /// Union of both, direct first.
    pub all_affected: Vec<String>,
}

/// Files that import `path`, directly or transitively, up to `max_depth`
/// layers out. The start file itself is excluded.
pub fn find_dependents(graph: &DependencyGraph, path: &str, max_depth: usize) -> Vec<String> {
    walk(graph, path, max_depth, |node| &node.imported_by)
}

/// Files that `path` imports, directly or transitively, up to `max_depth`
/// layers out. The start file itself is excluded.
pub fn find_dependencies(graph: &DependencyGraph, path: &str, max_depth: usize) -> Vec<String> {
    walk(graph, path, max_depth, |node| &node.imports)
}

fn walk(
    graph: &DependencyGraph,
    start: &str,
    max_depth: usize,
    neighbors: impl Fn(&GraphNode) -> &[String],
) -> Vec<String> {
    let start = normalize_path(start);
    let mut visited: HashSet<String> = HashSet::new();
    let mut result: Vec<String> = Vec::new();
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        let Some(node) = graph.node(&current) else {
            continue;
        };
        for next in neighbors(node) {
            if visited.insert(next.clone()) {
                result.push(next.clone());
                queue.push_back((next.clone(), depth + 1));
            }
        }
    }

    result
}

/// Test files related to `source`, drawn from `candidates`.
///
/// Unions three heuristics: candidates that import the source directly,
/// candidates among its transitive dependents, and candidates whose name
/// follows a `<base>.test` / `<base>.spec` / `test_<name>` convention.
/// First-seen order is preserved and duplicates dropped.
pub fn find_related_tests(
    graph: &DependencyGraph,
    source: &str,
    candidates: &[String],
) -> Vec<String> {
    let source = normalize_path(source);
    let normalized: Vec<(String, &str)> = candidates
        .iter()
        .map(|c| (normalize_path(c), c.as_str()))
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut result: Vec<String> = Vec::new();

    if let Some(node) = graph.node(&source) {
        for importer in &node.imported_by {
            if let Some((_, original)) = normalized.iter().find(|(n, _)| n == importer) {
                push_unique(&mut seen, &mut result, original);
            }
        }
    }

    for dependent in find_dependents(graph, &source, DEFAULT_MAX_DEPTH) {
        if let Some((_, original)) = normalized.iter().find(|(n, _)| *n == dependent) {
            push_unique(&mut seen, &mut result, original);
        }
    }

    let base = strip_extension(&source);
    let name = file_stem(&source);
    let patterns = [
        format!("{base}.test"),
        format!("{base}.spec"),
        format!("test_{name}"),
    ];
    for (norm, original) in &normalized {
        let stem = strip_extension(norm);
        if patterns.iter().any(|p| stem.contains(p.as_str())) {
            push_unique(&mut seen, &mut result, original);
        }
    }

    result
}

fn push_unique(seen: &mut HashSet<String>, result: &mut Vec<String>, candidate: &str) {
    if seen.insert(candidate.to_string()) {
        result.push(candidate.to_string());
    }
}

/// Partition the blast radius of a change set into direct and transitive
/// parts.
pub fn affected_files(graph: &DependencyGraph, changed: &[String]) -> AffectedFiles {
    let mut seen: HashSet<String> = HashSet::new();
    let mut direct: Vec<String> = Vec::new();
    for path in changed {
        let path = normalize_path(path);
        if seen.insert(path.clone()) {
            direct.push(path);
        }
    }

    let mut transitive: Vec<String> = Vec::new();
    for path in &direct {
        for dependent in find_dependents(graph, path, DEFAULT_MAX_DEPTH) {
            if seen.insert(dependent.clone()) {
                transitive.push(dependent);
            }
        }
    }

    let mut all = direct.clone();
    all.extend(transitive.iter().cloned());
    AffectedFiles {
        directly_affected: direct,
        transitively_affected: transitive,
        all_affected: all,
    }
}
