//! String-level path arithmetic shared by [`FileHandle`](super::FileHandle).
//!
//! Every function here works on a path that has already been normalized to
//! forward slashes.

/// Canonical directory separator
pub const SEPARATOR: char = '/';

/// Replace every backslash with a forward slash
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Strip trailing separators. A path made only of separators becomes `/`.
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() && !path.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Final segment of the path, ignoring trailing separators
pub fn file_name(path: &str) -> &str {
    let trimmed = trim_trailing_separators(path);
    match trimmed.rfind(SEPARATOR) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Everything before the final segment, or `None` when there is no separator.
///
/// The parent of a top-level entry such as `/etc` is `/`.
pub fn parent_path(path: &str) -> Option<&str> {
    let trimmed = trim_trailing_separators(path);
    if trimmed == "/" {
        return None;
    }
    match trimmed.rfind(SEPARATOR) {
        Some(0) => Some("/"),
        Some(index) => Some(&trimmed[..index]),
        None => None,
    }
}

/// Split a file name at its last dot into `(stem, extension)`
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rfind('.').map(|dot| (&name[..dot], &name[dot + 1..]))
}

/// Append `name` to `base` with exactly one separator between them
pub fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else if base.ends_with(SEPARATOR) {
        format!("{}{}", base, name)
    } else {
        format!("{}{}{}", base, SEPARATOR, name)
    }
}
