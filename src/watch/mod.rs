// src/watch/mod.rs

//! Source discovery and change detection.
//!
//! This module is responsible for:
//! - Selecting the files of a build target by extension (`patterns`).
//! - Walking the config folder through the [`FileSystem`] trait (`discovery`).
//! - Tracking modification times and detecting drift (`map`).
//!
//! It knows nothing about compiling; it only answers "did anything change?".
//!
//! [`FileSystem`]: crate::fs::FileSystem

pub mod discovery;
pub mod map;
pub mod patterns;

pub use discovery::{collect_files, DiscoveryOptions};
pub use map::{build_initial_map, detect_changes, ChangeReport, WatchEntry, WatchSet};
pub use patterns::SourceFilter;
