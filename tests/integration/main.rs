//! Integration tests for Ripple
//!
//! These tests verify that scanning, graph construction, caching, and
//! reachability queries work together over a real directory tree.

use ripple_analyzer::{build_graph, scan_project};
use ripple_core::model::ChangeType;
use ripple_core::{parse_diff, reach};
use std::fs;
use tempfile::TempDir;

/// A small mixed TypeScript/Python project.
fn create_sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("src/services")).unwrap();
    fs::create_dir_all(root.join("tests")).unwrap();
    fs::create_dir_all(root.join("scripts")).unwrap();

    fs::write(
        root.join("src/index.ts"),
        "import { UserService } from './services/user';\n\
         import { log } from './logger';\n\
         \n\
         new UserService().loadUsers();\n",
    )
    .unwrap();
    fs::write(
        root.join("src/services/user.ts"),
        "import { log } from '../logger';\n\
         \n\
         export class UserService {\n\
             loadUsers() { log('loading'); }\n\
         }\n",
    )
    .unwrap();
    fs::write(
        root.join("src/logger.ts"),
        "export function log(msg: string) { console.log(msg); }\n",
    )
    .unwrap();
    fs::write(
        root.join("tests/logger.test.ts"),
        "import { log } from '../src/logger';\n\
         \n\
         log('test');\n",
    )
    .unwrap();
    fs::write(
        root.join("scripts/report.py"),
        "from .helpers import render\n\
         import json\n",
    )
    .unwrap();
    fs::write(root.join("scripts/helpers.py"), "def render(): pass\n").unwrap();

    temp_dir
}

#[test]
fn test_scan_build_and_query() {
    let temp_dir = create_sample_project();
    let root = temp_dir.path();

    let files = scan_project(root).unwrap();
    assert_eq!(files.len(), 6);

    let graph = build_graph(&root.to_string_lossy(), &files);
    assert_eq!(graph.node_count(), 6);

    // Changing the logger ripples out to everything importing it.
    let affected = reach::affected_files(&graph, &["src/logger.ts".to_string()]);
    assert_eq!(affected.directly_affected, vec!["src/logger.ts"]);
    assert!(affected
        .transitively_affected
        .contains(&"src/index.ts".to_string()));
    assert!(affected
        .transitively_affected
        .contains(&"src/services/user.ts".to_string()));
    assert!(affected
        .transitively_affected
        .contains(&"tests/logger.test.ts".to_string()));

    // The Python side resolves independently of the TypeScript side.
    assert_eq!(
        graph.node("scripts/report.py").unwrap().imports,
        vec!["scripts/helpers.py"]
    );
    assert_eq!(
        graph.node("scripts/report.py").unwrap().external_packages,
        vec!["json"]
    );
}

#[test]
fn test_cache_round_trip_through_filesystem() {
    let temp_dir = create_sample_project();
    let root = temp_dir.path();

    let files = scan_project(root).unwrap();
    let graph = build_graph(&root.to_string_lossy(), &files);

    ripple_core::save_graph(&graph, root).unwrap();
    let restored = ripple_core::load_graph(root).unwrap().unwrap();
    assert_eq!(graph, restored);

    // Queries over the restored graph match the original.
    let before = reach::find_dependents(&graph, "src/logger.ts", 10);
    let after = reach::find_dependents(&restored, "src/logger.ts", 10);
    assert_eq!(before, after);

    ripple_core::clear_cache(root).unwrap();
    assert!(ripple_core::load_graph(root).unwrap().is_none());
}

#[test]
fn test_related_tests_discovery() {
    let temp_dir = create_sample_project();
    let root = temp_dir.path();

    let files = scan_project(root).unwrap();
    let graph = build_graph(&root.to_string_lossy(), &files);

    let candidates = vec!["tests/logger.test.ts".to_string()];
    let related = reach::find_related_tests(&graph, "src/logger.ts", &candidates);
    assert_eq!(related, vec!["tests/logger.test.ts"]);
}

#[test]
fn test_diff_to_affected_pipeline() {
    let temp_dir = create_sample_project();
    let root = temp_dir.path();

    let diff_text = "\
diff --git a/src/logger.ts b/src/logger.ts
index aaaaaaa..bbbbbbb 100644
--- a/src/logger.ts
+++ b/src/logger.ts
@@ -1,1 +1,3 @@
 export function log(msg: string) { console.log(msg); }
+
+export function warn(msg: string) { console.warn(msg); }
";

    let diffs = parse_diff(diff_text);
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].change_type, ChangeType::Modified);

    let changed: Vec<String> = diffs.iter().map(|d| d.path.clone()).collect();
    let files = scan_project(root).unwrap();
    let graph = build_graph(&root.to_string_lossy(), &files);
    let affected = reach::affected_files(&graph, &changed);

    assert!(affected.all_affected.len() > 1);
    assert_eq!(affected.directly_affected, vec!["src/logger.ts"]);
}
