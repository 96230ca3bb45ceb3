//! Brace-family (TypeScript/JavaScript) import and export extraction

use super::ImportExtractor;
use regex::Regex;
use ripple_core::model::{ExportKind, ExportRecord, ImportRecord};

/// Pattern-matching extractor for ES-style `import`/`export` declarations and
/// call-style `require` bindings.
pub struct BraceExtractor {
    import_stmt: Regex,
    side_effect: Regex,
    require_stmt: Regex,
    export_decl: Regex,
    export_list: Regex,
    export_star: Regex,
    export_default: Regex,
}

impl BraceExtractor {
    pub fn new() -> Self {
        BraceExtractor {
            // One alternation per binding shape: default + named, default +
            // namespace, named only, namespace only, default only. The named
            // group tolerates newlines, so multi-line lists match.
            import_stmt: Regex::new(
                r#"(?m)^[ \t]*import[ \t]+(type[ \t]+)?(?:([A-Za-z_$][\w$]*)[ \t]*,[ \t]*\{([^}]*)\}|([A-Za-z_$][\w$]*)[ \t]*,[ \t]*\*[ \t]*as[ \t]+([A-Za-z_$][\w$]*)|\{([^}]*)\}|\*[ \t]*as[ \t]+([A-Za-z_$][\w$]*)|([A-Za-z_$][\w$]*))\s*from\s*['"]([^'"]+)['"]"#,
            )
            .unwrap(),
            side_effect: Regex::new(r#"(?m)^[ \t]*import[ \t]*['"]([^'"]+)['"]"#).unwrap(),
            require_stmt: Regex::new(
                r#"(?:const|let|var)[ \t]+(?:\{([^}]*)\}|([A-Za-z_$][\w$]*))\s*=\s*require\(\s*['"]([^'"]+)['"]\s*\)"#,
            )
            .unwrap(),
            export_decl: Regex::new(
                r"(?m)^[ \t]*export[ \t]+(default[ \t]+)?(?:async[ \t]+)?(?:function\*?|abstract[ \t]+class|class|const|let|var|interface|type|enum)[ \t]+([A-Za-z_$][\w$]*)",
            )
            .unwrap(),
            export_list: Regex::new(
                r#"(?m)^[ \t]*export[ \t]*\{([^}]*)\}(?:\s*from\s*['"]([^'"]+)['"])?"#,
            )
            .unwrap(),
            export_star: Regex::new(
                r#"(?m)^[ \t]*export[ \t]*\*(?:[ \t]*as[ \t]+([A-Za-z_$][\w$]*))?\s*from\s*['"]([^'"]+)['"]"#,
            )
            .unwrap(),
            export_default: Regex::new(r"(?m)^[ \t]*export[ \t]+default[ \t]+").unwrap(),
        }
    }
}

impl Default for BraceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for BraceExtractor {
    fn extract_imports(&self, content: &str) -> Vec<ImportRecord> {
        let mut found: Vec<(usize, ImportRecord)> = Vec::new();

        for caps in self.import_stmt.captures_iter(content) {
            let specifier = caps[9].to_string();
            let mut named = Vec::new();
            if let Some(list) = caps.get(3).or_else(|| caps.get(6)) {
                named = parse_named_list(list.as_str());
            }
            let default_binding = caps
                .get(2)
                .or_else(|| caps.get(4))
                .or_else(|| caps.get(7))
                .or_else(|| caps.get(8))
                .map(|m| m.as_str().to_string());
            // `import d, * as ns` binds two names; the namespace rides along
            // as a named binding.
            if let Some(ns) = caps.get(5) {
                named.push(ns.as_str().to_string());
            }
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ImportRecord {
                    is_relative: is_relative(&specifier),
                    specifier,
                    named,
                    default_binding,
                    type_only: caps.get(1).is_some(),
                },
            ));
        }

        for caps in self.side_effect.captures_iter(content) {
            let specifier = caps[1].to_string();
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ImportRecord {
                    is_relative: is_relative(&specifier),
                    specifier,
                    ..ImportRecord::default()
                },
            ));
        }

        for caps in self.require_stmt.captures_iter(content) {
            let specifier = caps[3].to_string();
            let named = caps
                .get(1)
                .map(|m| parse_named_list(m.as_str()))
                .unwrap_or_default();
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ImportRecord {
                    is_relative: is_relative(&specifier),
                    specifier,
                    named,
                    default_binding: caps.get(2).map(|m| m.as_str().to_string()),
                    type_only: false,
                },
            ));
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, record)| record).collect()
    }

    fn extract_exports(&self, content: &str) -> Vec<ExportRecord> {
        let mut found: Vec<(usize, ExportRecord)> = Vec::new();

        for caps in self.export_decl.captures_iter(content) {
            let kind = if caps.get(1).is_some() {
                ExportKind::Default
            } else {
                ExportKind::Named
            };
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ExportRecord {
                    kind,
                    names: vec![caps[2].to_string()],
                    source: None,
                },
            ));
        }

        for caps in self.export_list.captures_iter(content) {
            let source = caps.get(2).map(|m| m.as_str().to_string());
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ExportRecord {
                    kind: if source.is_some() {
                        ExportKind::ReExport
                    } else {
                        ExportKind::Named
                    },
                    names: parse_named_list(&caps[1]),
                    source,
                },
            ));
        }

        for caps in self.export_star.captures_iter(content) {
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ExportRecord {
                    kind: ExportKind::ReExport,
                    names: caps.get(1).map(|m| vec![m.as_str().to_string()]).unwrap_or_default(),
                    source: Some(caps[2].to_string()),
                },
            ));
        }

        // Anonymous `export default <expr>`; declaration forms were already
        // captured above at the same offset.
        for m in self.export_default.find_iter(content) {
            if !found.iter().any(|(start, _)| *start == m.start()) {
                found.push((
                    m.start(),
                    ExportRecord {
                        kind: ExportKind::Default,
                        names: Vec::new(),
                        source: None,
                    },
                ));
            }
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, record)| record).collect()
    }
}

/// Split a `{a, b as c, type D}` binding list into local names.
fn parse_named_list(list: &str) -> Vec<String> {
    list.split(',')
        .filter_map(|entry| {
            let mut tokens: Vec<&str> = entry.split_whitespace().collect();
            if tokens.first() == Some(&"type") && tokens.len() > 1 {
                tokens.remove(0);
            }
            match tokens.as_slice() {
                [name] => Some((*name).to_string()),
                [_, "as", local] => Some((*local).to_string()),
                _ => None,
            }
        })
        .collect()
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with('/')
}
