//! Rules for directory and file names that end up on a filesystem.

use std::path::Path;

// Characters Windows refuses in file names; rejected everywhere so a manifest
// stays portable across content stores.
const RESERVED: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Why `value` is not a usable single path component, if it isn't.
pub(crate) fn component_problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("must not be empty");
    }
    if value.trim() != value {
        return Some("must not start or end with whitespace");
    }
    if value == "." || value == ".." {
        return Some("must not be a relative directory reference");
    }
    if value.contains(['/', '\\']) {
        return Some("must not contain path separators");
    }
    if value.contains(RESERVED) {
        return Some("must not contain reserved characters");
    }
    if value.chars().any(char::is_control) {
        return Some("must not contain control characters");
    }
    None
}

/// Like [`component_problem`], and additionally requires a `.md` extension.
pub(crate) fn markdown_file_problem(file: &str) -> Option<&'static str> {
    if let Some(problem) = component_problem(file) {
        return Some(problem);
    }
    let is_markdown = Path::new(file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    (!is_markdown).then_some("must have a .md extension")
}

/// Key used for collision checks. Case-insensitive filesystems treat
/// `Redis.md` and `redis.md` as the same file.
pub(crate) fn collision_key(value: &str) -> String {
    value.to_ascii_lowercase()
}
