// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{RawSection, Section};

/// File extension of unglue config files.
pub const CONFIG_EXTENSION: &str = "unglue";

/// Configuration exactly as read from an `.unglue` JSON file.
///
/// ```json
/// {
///     "css": ["main.scss"],
///     "js": ["app.js", "menu.js"],
///     "options": { "compress": true }
/// }
/// ```
///
/// Every key is optional. Use [`crate::config::load_and_validate`] to get an
/// [`UnglueConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUnglueConfig {
    #[serde(default)]
    pub css: Option<RawSection>,

    #[serde(default)]
    pub js: Option<RawSection>,

    /// Free-form build options forwarded verbatim with every compile request.
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Validated configuration for one `.unglue` file.
///
/// Besides the sections, it remembers where the file lives: outputs are
/// written next to it and named after it (`layout.unglue` → `layout.css`).
#[derive(Debug, Clone)]
pub struct UnglueConfig {
    path: PathBuf,
    css: Section,
    js: Section,
    options: Map<String, Value>,
}

impl UnglueConfig {
    /// Build a config from parts that are already known to be valid.
    pub fn new_unchecked(
        path: impl Into<PathBuf>,
        css: Section,
        js: Section,
        options: Map<String, Value>,
    ) -> Self {
        Self {
            path: path.into(),
            css,
            js,
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn css(&self) -> &Section {
        &self.css
    }

    pub fn js(&self) -> &Section {
        &self.js
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Folder holding the config file; sources are collected and outputs
    /// written here.
    pub fn folder(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Config file name without a trailing `.unglue`.
    pub fn base_name(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match name.strip_suffix(&format!(".{CONFIG_EXTENSION}")) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => name,
        }
    }

    /// Name of the artifact for `ext`, e.g. `layout.css`.
    pub fn dist_file(&self, ext: &str) -> String {
        format!("{}.{ext}", self.base_name())
    }

    /// Where the artifact for `ext` is written.
    pub fn output_path(&self, ext: &str) -> PathBuf {
        self.folder().join(self.dist_file(ext))
    }

    /// Resolve a declared entry file against the config folder.
    pub fn entry_path(&self, entry: &str) -> PathBuf {
        self.folder().join(entry)
    }
}
