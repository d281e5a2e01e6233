//! Shared helpers for size aggregation

use std::cmp::Reverse;
use std::path::Path;

use super::node::SizeNode;

const MB: f64 = 1024.0 * 1024.0;

/// Whether `dependency` is a sub-path of the scope directory `parent_name`.
///
/// A scoped package that peers on a sibling in its own scope
/// (`@scope/other` under `@scope`) should not surface as an external peer of
/// the scope directory. Only the immediate parent is checked.
pub fn is_scope_internal(parent_name: &str, dependency: &str) -> bool {
    parent_name.starts_with('@')
        && dependency
            .strip_prefix(parent_name)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Sort nodes largest first. Stable, so equal sizes keep their visit order.
pub fn sort_by_size(nodes: &mut [SizeNode]) {
    nodes.sort_by_key(|n| Reverse(n.size));
}

/// Base name of a directory, falling back to the full path for roots like `/`.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Share of `total` taken by `size`, rounded to one decimal place.
///
/// Returns `None` when `total` is zero.
pub fn percentage(size: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let raw = size as f64 / total as f64 * 100.0;
    Some((raw * 10.0).round() / 10.0)
}

/// Bytes expressed in mebibytes.
pub fn to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / MB
}
