//! Lexical path helpers for virtual and on-disk paths.
//!
//! Nothing here touches the filesystem. Project metadata may carry Windows
//! separators regardless of the host platform, so both separators are accepted.

use crate::types::ROOT_VIRTUAL_PATH;
use std::path::{Component, Path, PathBuf};

/// Parent virtual directory of a project-relative path.
///
/// `"Foo.cs"` -> `"."`, `"src/Models/User.cs"` -> `"src/Models"`.
pub fn virtual_dirname(relative_path: &str) -> String {
    let normalized = normalize_separators(relative_path);
    let trimmed = normalized.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
        None => ROOT_VIRTUAL_PATH.to_string(),
    }
}

/// Normalize a virtual path for comparison: forward slashes, no trailing slash,
/// no leading `./`, empty maps to the root sentinel.
pub fn normalize_virtual_path(virtual_path: &str) -> String {
    let normalized = normalize_separators(virtual_path);
    let mut trimmed = normalized.trim_end_matches('/');
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    if trimmed.is_empty() {
        ROOT_VIRTUAL_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Resolve `reference` relative to the directory containing `file`, lexically.
pub fn resolve_sibling(file: &Path, reference: &str) -> PathBuf {
    let base = file.parent().unwrap_or_else(|| Path::new(""));
    normalize_lexically(&base.join(normalize_separators(reference)))
}

/// Join a solution folder with a stored relative path, lexically.
pub fn join_normalized(base: &Path, relative: &str) -> PathBuf {
    normalize_lexically(&base.join(normalize_separators(relative)))
}

/// Collapse `.` and `..` components without consulting the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
