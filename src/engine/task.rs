// src/engine/task.rs

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::UnglueConfig;
use crate::dispatch::{write_artifact, Dispatcher};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::remote::CompileClient;
use crate::report::Reporter;
use crate::watch::{build_initial_map, detect_changes, DiscoveryOptions, WatchSet};

use super::{track_state, IterationReport, Track, TrackOutcome, TrackState};

/// Watches and compiles the sources of one `.unglue` config.
pub struct UnglueTask {
    config: UnglueConfig,
    server: String,
    fs: Arc<dyn FileSystem>,
    client: Arc<dyn CompileClient>,
    reporter: Arc<dyn Reporter>,
    discovery: DiscoveryOptions,
    scss_map: WatchSet,
    js_map: WatchSet,
}

impl fmt::Debug for UnglueTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnglueTask")
            .field("config", &self.config)
            .field("server", &self.server)
            .field("scss_map", &self.scss_map.len())
            .field("js_map", &self.js_map.len())
            .finish_non_exhaustive()
    }
}

impl UnglueTask {
    pub fn new(
        config: UnglueConfig,
        server: impl Into<String>,
        fs: Arc<dyn FileSystem>,
        client: Arc<dyn CompileClient>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            config,
            server: server.into(),
            fs,
            client,
            reporter,
            discovery: DiscoveryOptions::default(),
            scss_map: WatchSet::new(),
            js_map: WatchSet::new(),
        }
    }

    pub fn with_discovery(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn config(&self) -> &UnglueConfig {
        &self.config
    }

    pub fn scss_map(&self) -> &WatchSet {
        &self.scss_map
    }

    pub fn js_map(&self) -> &WatchSet {
        &self.js_map
    }

    /// Build the watch sets of the enabled sections.
    ///
    /// The script set never contains this config's own bundle, otherwise
    /// every compile would trigger the next one. Returns `false` when the
    /// config enables neither section.
    pub fn prepare(&mut self) -> Result<bool> {
        let folder = self.config.folder();
        let mut enabled = false;

        if self.config.css().is_enabled() {
            self.scss_map = build_initial_map(
                self.fs.as_ref(),
                &folder,
                Track::Css.source_extension(),
                Vec::<std::path::PathBuf>::new(),
                self.discovery,
            )?;
            enabled = true;
        }

        if self.config.js().is_enabled() {
            self.js_map = build_initial_map(
                self.fs.as_ref(),
                &folder,
                Track::Js.source_extension(),
                [self.config.output_path(Track::Js.output_extension())],
                self.discovery,
            )?;
            enabled = true;
        }

        debug!(
            config = ?self.config.path(),
            scss = self.scss_map.len(),
            js = self.js_map.len(),
            "prepared watch maps"
        );
        Ok(enabled)
    }

    /// Check both tracks and compile the dirty ones.
    ///
    /// Detected timestamps are committed before dispatching, so a failed
    /// compile is only retried once a source changes again (or on `force`).
    pub fn iterate(&mut self, force: bool) -> IterationReport {
        IterationReport {
            css: self.run_track(Track::Css, force),
            js: self.run_track(Track::Js, force),
        }
    }

    fn run_track(&mut self, track: Track, force: bool) -> TrackOutcome {
        let section = match track {
            Track::Css => self.config.css().clone(),
            Track::Js => self.config.js().clone(),
        };
        if !section.is_enabled() {
            return TrackOutcome::Skipped;
        }

        let map = match track {
            Track::Css => &mut self.scss_map,
            Track::Js => &mut self.js_map,
        };
        let report = detect_changes(self.fs.as_ref(), map);
        for path in &report.changed {
            self.reporter
                .info(&format!("file {} has changed.", path.display()));
        }
        if !report.removed.is_empty() {
            debug!(removed = ?report.removed, "dropped vanished files from watch map");
        }
        let changed = report.has_changes();
        *map = report.set;

        if track_state(true, changed, force) == TrackState::Idle {
            return TrackOutcome::Skipped;
        }

        let ext = track.output_extension();
        let dist_file = self.config.dist_file(ext);
        self.reporter.info(&format!("{dist_file} compile request"));

        let dispatcher = Dispatcher {
            server: &self.server,
            options: self.config.options(),
            client: self.client.as_ref(),
            fs: self.fs.as_ref(),
            reporter: self.reporter.as_ref(),
        };
        let output = match track {
            Track::Css => dispatcher.compile_css(&self.config, section.entries(), &self.scss_map),
            Track::Js => dispatcher.compile_js(&self.config, section.entries()),
        };

        let Some(output) = output else {
            return TrackOutcome::Failed;
        };

        match write_artifact(self.fs.as_ref(), &self.config.output_path(ext), &output) {
            Ok(()) => {
                self.reporter.success(&format!("{dist_file} compiled"));
                TrackOutcome::Compiled
            }
            Err(err) => {
                self.reporter
                    .error(&format!("unable to write {dist_file}: {err:#}"));
                TrackOutcome::Failed
            }
        }
    }
}
