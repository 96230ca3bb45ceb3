//! Unified diff parsing
//!
//! Single-pass, best-effort recognition of `diff --git` / `@@` structure.
//! Malformed or partial input never fails: unrecognized lines outside a hunk
//! are dropped, and near-miss header lines inside a hunk are kept as plain
//! content. The consuming pipeline must always get whatever could be parsed.

use crate::model::{ChangeType, DiffHunk, FileDiff};
use regex::Regex;

/// Parses unified diff text into per-file changes.
pub struct DiffParser {
    file_header: Regex,
    hunk_header: Regex,
}

impl DiffParser {
    pub fn new() -> Self {
        DiffParser {
            file_header: Regex::new(r"^diff --git a/(.+) b/(.+)$").unwrap(),
            hunk_header: Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap(),
        }
    }

    /// Parse diff text into an ordered sequence of [`FileDiff`]s.
    ///
    /// Empty input yields an empty vec. Never errors.
    pub fn parse(&self, text: &str) -> Vec<FileDiff> {
        let mut files: Vec<FileDiff> = Vec::new();
        let mut current: Option<FileDiff> = None;
        let mut hunk: Option<DiffHunk> = None;

        for line in text.lines() {
            if let Some(caps) = self.file_header.captures(line) {
                finish_hunk(&mut current, &mut hunk);
                finish_file(&mut files, &mut current);

                let old_path = &caps[1];
                let new_path = &caps[2];
                let renamed = old_path != new_path;
                current = Some(FileDiff {
                    path: new_path.to_string(),
                    change_type: if renamed {
                        ChangeType::Renamed
                    } else {
                        ChangeType::Modified
                    },
                    old_path: renamed.then(|| old_path.to_string()),
                    hunks: Vec::new(),
                });
                continue;
            }

            if let Some(caps) = self.hunk_header.captures(line) {
                // A hunk header without an open file has nothing to attach to.
                if current.is_some() {
                    finish_hunk(&mut current, &mut hunk);
                    hunk = Some(DiffHunk {
                        old_start: count(caps.get(1).map(|m| m.as_str()), 1),
                        old_lines: count(caps.get(2).map(|m| m.as_str()), 1),
                        new_start: count(caps.get(3).map(|m| m.as_str()), 1),
                        new_lines: count(caps.get(4).map(|m| m.as_str()), 1),
                        content: Vec::new(),
                        additions: Vec::new(),
                        deletions: Vec::new(),
                    });
                }
                continue;
            }

            let Some(h) = hunk.as_mut() else {
                // Marker lines between the file header and the first hunk can
                // override the change type inferred from the header paths.
                if let Some(file) = current.as_mut() {
                    if line.starts_with("new file mode") {
                        file.change_type = ChangeType::Added;
                        file.old_path = None;
                    } else if line.starts_with("deleted file mode") {
                        file.change_type = ChangeType::Deleted;
                        file.old_path = None;
                    }
                }
                continue;
            };

            if line.starts_with('+') && !line.starts_with("+++") {
                h.content.push(line.to_string());
                h.additions.push(line[1..].to_string());
            } else if line.starts_with('-') && !line.starts_with("---") {
                h.content.push(line.to_string());
                h.deletions.push(line[1..].to_string());
            } else {
                // Context lines, and anything that only resembles a header.
                h.content.push(line.to_string());
            }
        }

        finish_hunk(&mut current, &mut hunk);
        finish_file(&mut files, &mut current);
        files
    }
}

impl Default for DiffParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper constructing a [`DiffParser`] for a single parse.
pub fn parse_diff(text: &str) -> Vec<FileDiff> {
    DiffParser::new().parse(text)
}

fn finish_hunk(current: &mut Option<FileDiff>, hunk: &mut Option<DiffHunk>) {
    if let Some(h) = hunk.take() {
        if let Some(file) = current.as_mut() {
            file.hunks.push(h);
        }
    }
}

fn finish_file(files: &mut Vec<FileDiff>, current: &mut Option<FileDiff>) {
    if let Some(file) = current.take() {
        files.push(file);
    }
}

fn count(capture: Option<&str>, default: u32) -> u32 {
    capture.and_then(|s| s.parse().ok()).unwrap_or(default)
}
