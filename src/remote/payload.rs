// src/remote/payload.rs

//! JSON bodies exchanged with the compile server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One source file shipped with a compile request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub file: String,
    pub code: String,
}

/// Request body for `compile/scss` and `compile/js`.
///
/// `mainFile` is only sent for stylesheets; the script endpoint bundles all
/// of `files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilePayload {
    pub dist_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_file: Option<String>,

    pub files: Vec<SourceFile>,

    /// Filled from the config's `options` right before sending.
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl CompilePayload {
    pub fn new(dist_file: impl Into<String>, files: Vec<SourceFile>) -> Self {
        Self {
            dist_file: dist_file.into(),
            main_file: None,
            files,
            options: Map::new(),
        }
    }

    pub fn with_main_file(mut self, main_file: impl Into<String>) -> Self {
        self.main_file = Some(main_file.into());
        self
    }
}

/// Successful answer of the compile server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompileResponse {
    pub code: String,

    /// Source map; absent, `null` and `""` all mean "no map".
    #[serde(default)]
    pub map: Option<String>,
}

impl CompileResponse {
    pub fn map_str(&self) -> &str {
        self.map.as_deref().unwrap_or("")
    }
}

/// Everything produced by one dispatch, ready to be written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    pub code: String,
    pub map: String,
}

impl CompileOutput {
    pub fn has_map(&self) -> bool {
        !self.map.is_empty()
    }

    /// Append a response: its code always, its map only when non-empty.
    pub fn append(&mut self, response: &CompileResponse) {
        self.code.push_str(&response.code);
        let map = response.map_str();
        if !map.is_empty() {
            self.map.push_str(map);
        }
    }
}

impl From<CompileResponse> for CompileOutput {
    fn from(response: CompileResponse) -> Self {
        let mut output = CompileOutput::default();
        output.append(&response);
        output
    }
}
