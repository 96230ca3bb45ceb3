//! Relative import resolution against the project file set
//!
//! Candidate suffix lists are split per the importing file's language family;
//! the union is used when the family is unknown. A specifier that resolves to
//! nothing is reported as [`Resolution::Unresolved`] and the caller drops the
//! edge — a miss is never an error.

use ripple_core::model::{Family, Language};
use ripple_core::paths::{dirname, join, normalize_path, strip_extension};
use std::collections::BTreeSet;

/// Extension and index-file suffixes tried for brace-family importers.
const BRACE_SUFFIXES: &[&str] = &[
    ".ts",
    ".tsx",
    ".js",
    ".jsx",
    ".mjs",
    ".cjs",
    "/index.ts",
    "/index.tsx",
    "/index.js",
    "/index.jsx",
];

/// Suffixes tried for indentation-family importers.
const INDENT_SUFFIXES: &[&str] = &[".py", ".pyi", "/__init__.py"];

const ALL_SUFFIXES: &[&str] = &[
    ".ts",
    ".tsx",
    ".js",
    ".jsx",
    ".mjs",
    ".cjs",
    ".py",
    ".pyi",
    "/index.ts",
    "/index.tsx",
    "/index.js",
    "/index.jsx",
    "/__init__.py",
];

/// Outcome of resolving one import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The canonical key of a project file.
    Project(String),
    /// An external package name (first segment, or first two for `@scope/x`).
    External(String),
    /// A relative specifier with no matching project file.
    Unresolved,
}

/// Resolve `specifier` as imported from `from_path` against the set of
/// canonical project-file keys.
pub fn resolve(specifier: &str, from_path: &str, available: &BTreeSet<String>) -> Resolution {
    if !specifier.starts_with('.') && !specifier.starts_with('/') {
        return Resolution::External(package_name(specifier));
    }

    let from_path = normalize_path(from_path);
    let family = Language::from_path(&from_path).family();
    let specifier = match family {
        Some(Family::Indent) => dotted_to_path(specifier),
        _ => specifier.to_string(),
    };

    let base = if let Some(rooted) = specifier.strip_prefix('/') {
        // Root-relative specifiers resolve from the project root.
        normalize_path(rooted)
    } else {
        join(dirname(&from_path), &specifier)
    };

    let suffixes = match family {
        Some(Family::Brace) => BRACE_SUFFIXES,
        Some(Family::Indent) => INDENT_SUFFIXES,
        None => ALL_SUFFIXES,
    };

    if available.contains(&base) {
        return Resolution::Project(base);
    }
    for suffix in suffixes {
        let candidate = format!("{base}{suffix}");
        if available.contains(&candidate) {
            return Resolution::Project(candidate);
        }
    }
    let stripped = strip_extension(&base);
    if stripped != base {
        for suffix in suffixes {
            let candidate = format!("{stripped}{suffix}");
            if available.contains(&candidate) {
                return Resolution::Project(candidate);
            }
        }
    }

    Resolution::Unresolved
}

/// Package name an external specifier belongs to.
pub fn package_name(specifier: &str) -> String {
    let mut segments = specifier.split('/');
    let first = segments.next().unwrap_or(specifier);
    if first.starts_with('@') {
        match segments.next() {
            Some(second) => format!("{first}/{second}"),
            None => first.to_string(),
        }
    } else {
        first.to_string()
    }
}

/// Convert a dotted Python relative specifier into path form: one leading dot
/// anchors at the importing file's directory, each further dot climbs one
/// level, and interior dots become separators.
fn dotted_to_path(specifier: &str) -> String {
    let dots = specifier.chars().take_while(|c| *c == '.').count();
    if dots == 0 {
        return specifier.replace('.', "/");
    }
    let rest = specifier[dots..].replace('.', "/");
    let mut path = String::from(".");
    for _ in 1..dots {
        path.push_str("/..");
    }
    if !rest.is_empty() {
        path.push('/');
        path.push_str(&rest);
    }
    path
}
