// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{RawUnglueConfig, UnglueConfig, CONFIG_EXTENSION};
use crate::config::validate::validate_config;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::watch::{collect_files, DiscoveryOptions, SourceFilter};

/// Read a configuration file through `fs` and return the raw `RawUnglueConfig`.
///
/// This only performs JSON deserialization; it does **not** turn the
/// sections into [`crate::types::Section`]s. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawUnglueConfig> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawUnglueConfig = serde_json::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// A missing file, malformed JSON or a section that is neither a flag nor a
/// list of entry files is an error; the caller should treat it as fatal for
/// that config.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<UnglueConfig> {
    let path = path.as_ref();
    let raw_config = load_from_path(fs, path)?;
    let config = UnglueConfig::try_from((path.to_path_buf(), raw_config))?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the config files a CLI path refers to.
///
/// - a file is returned as is,
/// - a folder is searched recursively for `*.unglue` files.
pub fn discover_configs(
    fs: &dyn FileSystem,
    path: &Path,
    options: DiscoveryOptions,
) -> Result<Vec<PathBuf>> {
    if fs.is_file(path) {
        return Ok(vec![path.to_path_buf()]);
    }

    let filter = SourceFilter::new(CONFIG_EXTENSION, Vec::<PathBuf>::new())?;
    let found = collect_files(fs, path, &filter, options)?;
    Ok(found)
}
