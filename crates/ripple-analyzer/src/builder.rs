//! Two-pass dependency graph construction

use crate::languages;
use crate::resolver::{self, Resolution};
use chrono::Utc;
use ripple_core::model::{DependencyGraph, GraphMetadata, GraphNode, Language};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Build a bidirectional import graph over `files`, a canonical-path →
/// content mapping.
///
/// Pass 1 creates one node per file of a recognized language family, with
/// forward edges resolved against the full key set. Pass 2 mirrors every
/// resolved edge into the target's `imported_by` list. BTreeMap iteration
/// makes the whole build deterministic; running it twice on the same input
/// produces structurally equal graphs.
pub fn build_graph(root: &str, files: &BTreeMap<String, String>) -> DependencyGraph {
    let available: BTreeSet<String> = files.keys().cloned().collect();
    let mut nodes: HashMap<String, GraphNode> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for (path, content) in files {
        let language = Language::from_path(path);
        let Some(extractor) = languages::extractor_for(language) else {
            continue;
        };

        let mut node = GraphNode::new(path.clone(), language);
        for record in extractor.extract_imports(content) {
            match resolver::resolve(&record.specifier, path, &available) {
                Resolution::Project(target) => {
                    if target != *path && !node.imports.contains(&target) {
                        node.imports.push(target);
                    }
                }
                Resolution::External(package) => {
                    if !node.external_packages.contains(&package) {
                        node.external_packages.push(package);
                    }
                }
                Resolution::Unresolved => {
                    tracing::debug!(
                        "unresolved import {:?} in {}, dropping edge",
                        record.specifier,
                        path
                    );
                }
            }
        }
        nodes.insert(path.clone(), node);
        order.push(path.clone());
    }

    for path in &order {
        let targets = nodes[path].imports.clone();
        for target in targets {
            if let Some(node) = nodes.get_mut(&target) {
                if !node.imported_by.contains(path) {
                    node.imported_by.push(path.clone());
                }
            }
        }
    }

    let file_count = nodes.len();
    let graph = DependencyGraph {
        nodes,
        metadata: GraphMetadata {
            built_at: Utc::now().to_rfc3339(),
            root: root.to_string(),
            file_count,
        },
    };
    tracing::info!(
        "built dependency graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
