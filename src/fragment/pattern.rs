//! Glob expansion for fragment paths.
//!
//! `**` matches across directories, `*` and `?` stay within one path
//! component. The filesystem is walked from the longest literal prefix of the
//! pattern, depth first with entries sorted by file name. Hidden entries only
//! match when the pattern itself names a component starting with `.`, and
//! directories that cannot be read are skipped with a warning.

use crate::error::BuildError;
use globset::GlobBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Characters globset treats as syntax once a path is expanded.
const GLOB_META: [char; 3] = ['*', '?', '['];

/// True if the path should be expanded rather than opened directly.
///
/// Only `*` marks a pattern; `?` and `[` are ordinary file name characters in
/// a literal path.
pub fn is_pattern(path: &str) -> bool {
    path.contains('*')
}

/// Expand a pattern into the regular files it matches.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>, BuildError> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let (root, remaining) = split_literal_root(pattern);
    let walk_root = if root.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        root.clone()
    };
    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(&walk_root)
        .follow_links(true)
        .sort_by_file_name();
    if !pattern.contains("**") {
        walker = walker.max_depth(remaining);
    }
    let hidden_allowed = names_hidden_component(pattern, remaining);

    let mut matches = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || hidden_allowed || !is_hidden(entry));
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(pattern, error = %e, "Skipping unreadable path during pattern expansion");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        // Relative patterns without a literal prefix match against paths without "./"
        let candidate = if root.as_os_str().is_empty() {
            entry
                .path()
                .strip_prefix(&walk_root)
                .unwrap_or(entry.path())
                .to_path_buf()
        } else {
            entry.path().to_path_buf()
        };
        if matcher.is_match(&candidate) {
            matches.push(candidate);
        }
    }
    Ok(matches)
}

/// Leading components free of wildcards, and how many components follow them.
fn split_literal_root(pattern: &str) -> (PathBuf, usize) {
    let components: Vec<Component<'_>> = Path::new(pattern).components().collect();
    let literal = components
        .iter()
        .take_while(|c| !c.as_os_str().to_string_lossy().contains(GLOB_META))
        .count();
    let root: PathBuf = components[..literal].iter().collect();
    (root, components.len() - literal)
}

/// True if one of the last `remaining` components of the pattern starts with `.`.
fn names_hidden_component(pattern: &str, remaining: usize) -> bool {
    let components: Vec<Component<'_>> = Path::new(pattern).components().collect();
    components[components.len() - remaining..]
        .iter()
        .any(|c| matches!(c, Component::Normal(name) if name.to_string_lossy().starts_with('.')))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
