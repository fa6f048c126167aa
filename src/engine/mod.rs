// src/engine/mod.rs

//! Orchestration of one `.unglue` config.
//!
//! An [`UnglueTask`] owns the config, one watch set per build target and the
//! collaborators (filesystem, compile client, reporter). An external driver
//! calls [`UnglueTask::iterate`] repeatedly; [`driver`] provides the loops the
//! CLI uses.
//!
//! The CSS and JS pipelines are independent tracks, each either idle or
//! dirty for the current iteration.

pub mod driver;
pub mod task;

pub use driver::{poll_forever, run_once};
pub use task::UnglueTask;

/// The two build targets of a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Css,
    Js,
}

impl Track {
    /// Extension of the compiled artifact.
    pub fn output_extension(self) -> &'static str {
        match self {
            Track::Css => "css",
            Track::Js => "js",
        }
    }

    /// Extension of the watched sources.
    pub fn source_extension(self) -> &'static str {
        match self {
            Track::Css => "scss",
            Track::Js => "js",
        }
    }
}

/// Per-iteration state of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    Idle,
    Dirty,
}

/// A track is dirty when its section is enabled and something changed or
/// the iteration is forced.
pub fn track_state(enabled: bool, changed: bool, force: bool) -> TrackState {
    if enabled && (changed || force) {
        TrackState::Dirty
    } else {
        TrackState::Idle
    }
}

/// What happened to a track during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Disabled or idle; nothing was sent.
    Skipped,
    /// Dispatched and written to disk.
    Compiled,
    /// Dispatched, but no artifact was produced or it could not be written.
    Failed,
}

/// Result of [`UnglueTask::iterate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationReport {
    pub css: TrackOutcome,
    pub js: TrackOutcome,
}

impl IterationReport {
    pub fn dispatched(&self) -> bool {
        self.css != TrackOutcome::Skipped || self.js != TrackOutcome::Skipped
    }

    pub fn has_failures(&self) -> bool {
        self.css == TrackOutcome::Failed || self.js == TrackOutcome::Failed
    }
}
