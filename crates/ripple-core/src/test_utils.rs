//! Test utilities for ripple-core

use crate::model::{DependencyGraph, GraphMetadata, GraphNode, Language};
use std::collections::HashMap;

/// Build a graph from (file, imports) pairs with imported_by wired
/// symmetrically, the way the builder would.
pub fn graph_from_edges(edges: &[(&str, &[&str])]) -> DependencyGraph {
    let mut nodes: HashMap<String, GraphNode> = HashMap::new();
    for (path, imports) in edges {
        let mut node = GraphNode::new(*path, Language::from_path(path));
        node.imports = imports.iter().map(|s| s.to_string()).collect();
        nodes.insert(path.to_string(), node);
    }

    let order: Vec<String> = edges.iter().map(|(p, _)| p.to_string()).collect();
    for path in &order {
        let imports = nodes[path].imports.clone();
        for target in imports {
            if let Some(node) = nodes.get_mut(&target) {
                if !node.imported_by.contains(path) {
                    node.imported_by.push(path.clone());
                }
            }
        }
    }

    let file_count = nodes.len();
    DependencyGraph {
        nodes,
        metadata: GraphMetadata {
            built_at: "2026-01-01T00:00:00+00:00".to_string(),
            root: ".".to_string(),
            file_count,
        },
    }
}

/// A two-file diff, each file with one hunk of 2 additions and 1 deletion.
pub fn sample_diff() -> &'static str {
    "\
diff --git a/src/index.ts b/src/index.ts
index 1111111..2222222 100644
--- a/src/index.ts
+++ b/src/index.ts
@@ -1,4 +1,5 @@
 import { helper } from './utils';
-const old = helper(1);
+const fresh = helper(2);
+console.log(fresh);
 export default fresh;
diff --git a/src/utils.ts b/src/utils.ts
index 3333333..4444444 100644
--- a/src/utils.ts
+++ b/src/utils.ts
@@ -10,3 +10,4 @@
 export function helper(n: number) {
-  return n;
+  return n + 1;
+}
"
}
