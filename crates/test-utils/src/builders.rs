#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{Map, Value};
use unglue::config::UnglueConfig;
use unglue::types::Section;

/// Builder for `UnglueConfig` to simplify test setup.
pub struct UnglueConfigBuilder {
    path: PathBuf,
    css: Section,
    js: Section,
    options: Map<String, Value>,
}

impl UnglueConfigBuilder {
    /// `path` is where the `.unglue` file would live, e.g. `"site/layout.unglue"`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            css: Section::Disabled,
            js: Section::Disabled,
            options: Map::new(),
        }
    }

    pub fn css(mut self, entries: &[&str]) -> Self {
        self.css = entries_section(entries);
        self
    }

    pub fn js(mut self, entries: &[&str]) -> Self {
        self.js = entries_section(entries);
        self
    }

    pub fn option(mut self, key: &str, value: Value) -> Self {
        self.options.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> UnglueConfig {
        UnglueConfig::new_unchecked(self.path, self.css, self.js, self.options)
    }
}

fn entries_section(entries: &[&str]) -> Section {
    if entries.is_empty() {
        Section::Disabled
    } else {
        Section::Entries(entries.iter().map(|e| e.to_string()).collect())
    }
}
