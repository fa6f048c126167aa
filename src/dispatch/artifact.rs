// src/dispatch/artifact.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::fs::FileSystem;
use crate::remote::CompileOutput;

/// Path of the source map belonging to `output_path` (`a.css` → `a.css.map`).
pub fn map_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.as_os_str().to_os_string();
    name.push(".map");
    PathBuf::from(name)
}

/// Write a compiled artifact and keep its source map in step.
///
/// The code is written first. Only then is the map written, or a leftover
/// map from an earlier run deleted when this output has none, so a map file
/// exists exactly when the current artifact came with map data.
pub fn write_artifact(fs: &dyn FileSystem, output_path: &Path, output: &CompileOutput) -> Result<()> {
    fs.write(output_path, output.code.as_bytes())?;

    let map_path = map_path(output_path);
    if output.has_map() {
        fs.write(&map_path, output.map.as_bytes())?;
    } else if fs.exists(&map_path) {
        debug!("removing stale source map {:?}", map_path);
        fs.remove_file(&map_path)?;
    }

    Ok(())
}
