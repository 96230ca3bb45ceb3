//! CLI command implementations

use ripple_analyzer::{build_graph, scan_project};
use ripple_core::model::{ChangeType, DependencyGraph};
use ripple_core::{parse_diff, reach};
use std::io::Read;
use std::path::PathBuf;

pub fn graph(root: PathBuf) -> anyhow::Result<()> {
    let graph = build(&root)?;
    ripple_core::save_graph(&graph, &root)?;
    tracing::info!("graph cached under {}", ripple_core::cache_dir(&root).display());
    Ok(())
}

pub fn affected(root: PathBuf, paths: Vec<String>) -> anyhow::Result<()> {
    let graph = load_or_build(&root)?;
    let affected = reach::affected_files(&graph, &paths);

    println!("directly affected ({}):", affected.directly_affected.len());
    for path in &affected.directly_affected {
        println!("  {path}");
    }
    println!("transitively affected ({}):", affected.transitively_affected.len());
    for path in &affected.transitively_affected {
        println!("  {path}");
    }
    Ok(())
}

pub fn dependents(root: PathBuf, path: String, depth: usize) -> anyhow::Result<()> {
    let graph = load_or_build(&root)?;
    for dependent in reach::find_dependents(&graph, &path, depth) {
        println!("{dependent}");
    }
    Ok(())
}

pub fn diff(file: Option<PathBuf>) -> anyhow::Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    for file_diff in parse_diff(&text) {
        let tag = match file_diff.change_type {
            ChangeType::Added => "A",
            ChangeType::Modified => "M",
            ChangeType::Deleted => "D",
            ChangeType::Renamed => "R",
        };
        let rename = file_diff
            .old_path
            .as_deref()
            .map(|old| format!(" (from {old})"))
            .unwrap_or_default();
        println!(
            "{tag} {}{rename}  +{} -{}",
            file_diff.path,
            file_diff.additions(),
            file_diff.deletions()
        );
    }
    Ok(())
}

pub fn tests(root: PathBuf, source: String) -> anyhow::Result<()> {
    let graph = load_or_build(&root)?;
    let candidates: Vec<String> = graph
        .nodes
        .keys()
        .filter(|path| looks_like_test(path))
        .cloned()
        .collect();

    for test in reach::find_related_tests(&graph, &source, &candidates) {
        println!("{test}");
    }
    Ok(())
}

pub fn clear(root: PathBuf) -> anyhow::Result<()> {
    tracing::info!("Clearing cache for: {}", root.display());
    ripple_core::clear_cache(&root)?;
    tracing::info!("Cache cleared");
    Ok(())
}

fn build(root: &PathBuf) -> anyhow::Result<DependencyGraph> {
    let files = scan_project(root)?;
    let graph = build_graph(&root.to_string_lossy(), &files);
    tracing::info!("Indexed {} nodes, {} edges", graph.node_count(), graph.edge_count());
    Ok(graph)
}

/// Reuse a cached graph when one exists, otherwise build fresh.
fn load_or_build(root: &PathBuf) -> anyhow::Result<DependencyGraph> {
    if let Some(graph) = ripple_core::load_graph(root)? {
        tracing::info!("using cached graph ({} nodes)", graph.node_count());
        return Ok(graph);
    }
    build(root)
}

fn looks_like_test(path: &str) -> bool {
    let name = ripple_core::paths::basename(path);
    name.contains(".test.")
        || name.contains(".spec.")
        || name.starts_with("test_")
        || path.split('/').any(|seg| seg == "tests" || seg == "__tests__")
}
