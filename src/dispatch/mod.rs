// src/dispatch/mod.rs

//! Turning a dirty build target into compile requests and artifacts.
//!
//! - [`Dispatcher`] builds payloads, talks to the [`CompileClient`] and
//!   folds the answers into one [`CompileOutput`].
//! - [`artifact`] writes that output (and its source map) next to the config.
//!
//! Every failure stops here: the caller only ever sees `None`.

pub mod artifact;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::UnglueConfig;
use crate::fs::FileSystem;
use crate::remote::{
    endpoint_url, remote_message, CompileClient, CompileOutput, CompilePayload, CompileResponse,
    SourceFile, TransportError, JS_ENDPOINT, SCSS_ENDPOINT,
};
use crate::report::Reporter;
use crate::watch::WatchSet;

pub use artifact::write_artifact;

/// Borrowed view of everything one dispatch needs.
pub struct Dispatcher<'a> {
    pub server: &'a str,
    pub options: &'a Map<String, Value>,
    pub client: &'a dyn CompileClient,
    pub fs: &'a dyn FileSystem,
    pub reporter: &'a dyn Reporter,
}

impl Dispatcher<'_> {
    /// Send one payload to `endpoint`, with the global options attached.
    ///
    /// Failures are reported as errors and turned into `None`; they are
    /// never retried. A success body carrying a non-empty `message` is a
    /// failed compile, even when it also has a `code` field.
    pub fn generate_request(
        &self,
        endpoint: &str,
        mut payload: CompilePayload,
    ) -> Option<CompileResponse> {
        payload.options = self.options.clone();
        let url = endpoint_url(self.server, endpoint);

        let result = serde_json::to_value(&payload)
            .map_err(|e| TransportError::InvalidBody(e.to_string()))
            .and_then(|body| self.client.post(&url, &body))
            .and_then(|answer| match remote_message(&answer) {
                Some(message) => Err(TransportError::Remote(message)),
                None => Ok(answer),
            })
            .and_then(|answer| {
                serde_json::from_value::<CompileResponse>(answer)
                    .map_err(|e| TransportError::InvalidBody(e.to_string()))
            });

        match result {
            Ok(response) => Some(response),
            Err(err) => {
                self.reporter.error(&err.to_string());
                None
            }
        }
    }

    /// Compile every stylesheet entry point, one request each, in declaration
    /// order.
    ///
    /// Each request carries the content of the whole stylesheet watch set so
    /// the server can resolve imports. Returns `None` when no request
    /// succeeded.
    pub fn compile_css(
        &self,
        config: &UnglueConfig,
        entries: &[String],
        sources: &WatchSet,
    ) -> Option<CompileOutput> {
        let files = self.read_sources(sources.paths());
        let dist_file = config.dist_file("css");

        let mut output = CompileOutput::default();
        let mut succeeded = 0usize;

        for entry in entries {
            let main_file = config.entry_path(entry);
            let payload = CompilePayload::new(dist_file.clone(), files.clone())
                .with_main_file(main_file.to_string_lossy());

            if let Some(response) = self.generate_request(SCSS_ENDPOINT, payload) {
                output.append(&response);
                succeeded += 1;
            }
        }

        debug!(entries = entries.len(), succeeded, "stylesheet dispatch finished");
        (succeeded > 0).then_some(output)
    }

    /// Bundle the declared script entries with a single request.
    ///
    /// An entry that cannot be read aborts the dispatch.
    pub fn compile_js(&self, config: &UnglueConfig, entries: &[String]) -> Option<CompileOutput> {
        let mut files = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = config.entry_path(entry);
            match self.fs.read_to_string(&path) {
                Ok(code) => files.push(SourceFile {
                    file: path.to_string_lossy().into_owned(),
                    code,
                }),
                Err(err) => {
                    self.reporter
                        .error(&format!("unable to read script entry {}: {err:#}", path.display()));
                    return None;
                }
            }
        }

        let payload = CompilePayload::new(config.dist_file("js"), files);
        self.generate_request(JS_ENDPOINT, payload)
            .map(CompileOutput::from)
    }

    /// Read sources into payload files; unreadable ones are skipped.
    fn read_sources<'p>(&self, paths: impl Iterator<Item = &'p std::path::Path>) -> Vec<SourceFile> {
        paths
            .filter_map(|path| match self.fs.read_to_string(path) {
                Ok(code) => Some(SourceFile {
                    file: path.to_string_lossy().into_owned(),
                    code,
                }),
                Err(err) => {
                    debug!("leaving {:?} out of the payload: {err:#}", path);
                    None
                }
            })
            .collect()
    }
}
