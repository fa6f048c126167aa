// src/watch/map.rs

//! Modification-time tracking for one build target.
//!
//! A [`WatchSet`] remembers when each source file was last seen modified.
//! [`detect_changes`] compares it against the filesystem and returns the
//! refreshed set as a new value; committing it is up to the caller.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Result;
use tracing::debug;

use crate::fs::FileSystem;
use crate::watch::discovery::{collect_files, DiscoveryOptions};
use crate::watch::patterns::SourceFilter;

/// One tracked source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    pub path: PathBuf,
    pub last_modified: SystemTime,
}

/// Tracked files of one build target. Paths are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    entries: Vec<WatchEntry>,
}

impl WatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `path`, or refresh its timestamp if it is already tracked.
    pub fn insert(&mut self, path: impl Into<PathBuf>, last_modified: SystemTime) {
        let path = path.into();
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => entry.last_modified = last_modified,
            None => self.entries.push(WatchEntry {
                path,
                last_modified,
            }),
        }
    }

    pub fn get(&self, path: &Path) -> Option<SystemTime> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.last_modified)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchEntry> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }
}

/// Outcome of one [`detect_changes`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    /// Files whose modification time moved forward.
    pub changed: Vec<PathBuf>,
    /// Files that could no longer be stat-ed; they are absent from `set`.
    pub removed: Vec<PathBuf>,
    /// The refreshed watch set.
    pub set: WatchSet,
}

impl ChangeReport {
    /// Whether the target is dirty. Removals alone do not count.
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Discover every file with `extension` below `root`, skipping `exclude`,
/// and record its current modification time.
///
/// Files whose modification time cannot be read are left out.
pub fn build_initial_map<I, P>(
    fs: &dyn FileSystem,
    root: &Path,
    extension: &str,
    exclude: I,
    options: DiscoveryOptions,
) -> Result<WatchSet>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let filter = SourceFilter::new(extension, exclude)?;
    let mut set = WatchSet::new();

    for path in collect_files(fs, root, &filter, options)? {
        match fs.modified(&path) {
            Ok(modified) => set.insert(path, modified),
            Err(err) => debug!("not tracking {:?}: {err:#}", path),
        }
    }

    debug!(
        root = ?root,
        extension = filter.extension(),
        files = set.len(),
        "built watch map"
    );
    Ok(set)
}

/// Re-stat every tracked file.
///
/// A file counts as changed only when its modification time is strictly
/// greater than the stored one. A file that can no longer be stat-ed is
/// dropped from the returned set and listed in [`ChangeReport::removed`].
/// `set` itself is never modified.
pub fn detect_changes(fs: &dyn FileSystem, set: &WatchSet) -> ChangeReport {
    let mut changed = Vec::new();
    let mut removed = Vec::new();
    let mut next = WatchSet::new();

    for entry in set.iter() {
        match fs.modified(&entry.path) {
            Ok(current) if current > entry.last_modified => {
                changed.push(entry.path.clone());
                next.insert(entry.path.clone(), current);
            }
            Ok(_) => next.insert(entry.path.clone(), entry.last_modified),
            Err(err) => {
                debug!("tracked file {:?} disappeared: {err:#}", entry.path);
                removed.push(entry.path.clone());
            }
        }
    }

    ChangeReport {
        changed,
        removed,
        set: next,
    }
}
