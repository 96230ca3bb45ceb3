//! Indentation-family (Python) import extraction

use super::ImportExtractor;
use regex::Regex;
use ripple_core::model::ImportRecord;

/// Pattern-matching extractor for `from ... import ...` and bare `import`
/// statements, including parenthesized multi-line name lists.
pub struct IndentExtractor {
    from_import: Regex,
    bare_import: Regex,
}

impl IndentExtractor {
    pub fn new() -> Self {
        IndentExtractor {
            from_import: Regex::new(
                r"(?m)^[ \t]*from[ \t]+([\w.]+)[ \t]+import[ \t]+(?:\(([^)]*)\)|([^\n#]+))",
            )
            .unwrap(),
            bare_import: Regex::new(r"(?m)^[ \t]*import[ \t]+([\w. \t,]+)").unwrap(),
        }
    }
}

impl Default for IndentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor for IndentExtractor {
    fn extract_imports(&self, content: &str) -> Vec<ImportRecord> {
        let mut found: Vec<(usize, ImportRecord)> = Vec::new();

        for caps in self.from_import.captures_iter(content) {
            let specifier = caps[1].to_string();
            let list = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            found.push((
                caps.get(0).map_or(0, |m| m.start()),
                ImportRecord {
                    is_relative: specifier.starts_with('.'),
                    specifier,
                    named: parse_name_list(list),
                    default_binding: None,
                    type_only: false,
                },
            ));
        }

        // `import a.b as c, d` yields one record per module in the list.
        for caps in self.bare_import.captures_iter(content) {
            let start = caps.get(0).map_or(0, |m| m.start());
            for entry in caps[1].split(',') {
                let tokens: Vec<&str> = entry.split_whitespace().collect();
                let (module, alias) = match tokens.as_slice() {
                    [module] => (*module, None),
                    [module, "as", alias] => (*module, Some((*alias).to_string())),
                    _ => continue,
                };
                found.push((
                    start,
                    ImportRecord {
                        is_relative: module.starts_with('.'),
                        specifier: module.to_string(),
                        named: Vec::new(),
                        default_binding: alias,
                        type_only: false,
                    },
                ));
            }
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, record)| record).collect()
    }
}

/// Split an import name list, resolving `as` aliases to local names and
/// dropping trailing comments and wildcard entries.
fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .filter_map(|entry| {
            let entry = entry.split('#').next().unwrap_or("");
            let tokens: Vec<&str> = entry.split_whitespace().collect();
            match tokens.as_slice() {
                ["*"] => None,
                [name] => Some((*name).to_string()),
                [_, "as", local] => Some((*local).to_string()),
                _ => None,
            }
        })
        .collect()
}
