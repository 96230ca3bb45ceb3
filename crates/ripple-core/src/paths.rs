//! Helpers for canonical `/`-separated path keys
//!
//! Graph keys are root-relative strings with forward slashes, independent of
//! the host platform. All traversal and resolution code normalizes through
//! these helpers so that `./a/../b` and `b` name the same node.

/// Collapse `.`/`..` segments and redundant separators.
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // Leading `..` segments have nothing to pop against and are
                // kept as-is.
                if segments.last().is_none_or(|s| *s == "..") {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            _ => segments.push(segment),
        }
    }
    segments.join("/")
}

/// Directory portion of a path key, or `""` at the root.
pub fn dirname(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

/// Final segment of a path key.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Join a relative specifier onto a directory and normalize the result.
pub fn join(dir: &str, rest: &str) -> String {
    if dir.is_empty() {
        normalize_path(rest)
    } else {
        normalize_path(&format!("{dir}/{rest}"))
    }
}

/// Strip the trailing extension from the final segment, if there is one.
///
/// A leading dot does not count as an extension separator, so `.env` and
/// `a/.hidden` come back unchanged.
pub fn strip_extension(path: &str) -> &str {
    let name = basename(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => &path[..path.len() - (name.len() - idx)],
        _ => path,
    }
}

/// `basename` without its extension.
pub fn file_stem(path: &str) -> &str {
    basename(strip_extension(path))
}
