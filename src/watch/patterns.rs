// src/watch/patterns.rs

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use globset::{Glob, GlobMatcher};

/// Decides which files under a watch root belong to a build target.
///
/// A file matches when its root-relative path ends in `.<extension>` and the
/// file itself is not one of the excluded paths. Exclusions are exact paths
/// (as produced by traversal), not patterns.
#[derive(Clone)]
pub struct SourceFilter {
    extension: String,
    matcher: GlobMatcher,
    exclude: HashSet<PathBuf>,
}

impl fmt::Debug for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFilter")
            .field("extension", &self.extension)
            .field("exclude", &self.exclude)
            .finish_non_exhaustive()
    }
}

impl SourceFilter {
    pub fn new<I, P>(extension: &str, exclude: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            bail!("invalid source extension: {extension:?}");
        }

        let pattern = format!("**/*.{extension}");
        let matcher = Glob::new(&pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .compile_matcher();

        Ok(Self {
            extension: extension.to_string(),
            matcher,
            exclude: exclude.into_iter().map(Into::into).collect(),
        })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.contains(path)
    }

    /// `path` is the full path, `rel_path` the same path relative to the
    /// watch root with forward slashes (e.g. `"scss/_vars.scss"`).
    pub fn matches(&self, path: &Path, rel_path: &str) -> bool {
        self.matcher.is_match(rel_path) && !self.is_excluded(path)
    }
}
