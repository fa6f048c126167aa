// src/config/mod.rs

//! Configuration loading and validation for unglue.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Load and discover config files (`loader.rs`).
//! - Turn the dynamic `bool | list` sections into [`Section`]s (`validate.rs`).
//!
//! [`Section`]: crate::types::Section

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{discover_configs, load_and_validate, load_from_path};
pub use model::{RawUnglueConfig, UnglueConfig, CONFIG_EXTENSION};
pub use validate::validate_config;
