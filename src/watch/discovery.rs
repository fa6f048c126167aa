// src/watch/discovery.rs

//! Recursive collection of source files below a watch root.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::fs::FileSystem;
use crate::watch::patterns::SourceFilter;

/// Folders nested deeper than this are ignored (guards against symlink loops).
pub const MAX_DEPTH: usize = 64;

/// Options for walking a watch root.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryOptions {
    /// Descend into symlinked folders.
    pub follow_symlinks: bool,
}

/// Collect all files under `root` accepted by `filter`, sorted by path.
///
/// Only a failure to list `root` itself is an error; sub-folders that cannot
/// be listed are skipped.
pub fn collect_files(
    fs: &dyn FileSystem,
    root: &Path,
    filter: &SourceFilter,
    options: DiscoveryOptions,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![(root.to_path_buf(), 0usize)];

    while let Some((dir, depth)) = stack.pop() {
        let entries = match fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if depth == 0 => return Err(err),
            Err(err) => {
                debug!("skipping unreadable folder {:?}: {err:#}", dir);
                continue;
            }
        };

        for path in entries {
            if fs.is_dir(&path) {
                if fs.is_symlink(&path) && !options.follow_symlinks {
                    debug!("not following symlinked folder {:?}", path);
                    continue;
                }
                if depth + 1 > MAX_DEPTH {
                    debug!("not descending into {:?}: too deep", path);
                    continue;
                }
                stack.push((path, depth + 1));
            } else if fs.is_file(&path) {
                if let Some(rel_str) = relative_str(root, &path) {
                    if filter.matches(&path, &rel_str) {
                        files.push(path);
                    }
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let s = rel.to_string_lossy().replace('\\', "/");
    Some(s)
}
