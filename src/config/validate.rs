// src/config/validate.rs

use std::path::PathBuf;

use crate::config::model::{RawUnglueConfig, UnglueConfig};
use crate::errors::{Result, UnglueError};
use crate::types::Section;

impl TryFrom<(PathBuf, RawUnglueConfig)> for UnglueConfig {
    type Error = UnglueError;

    fn try_from((path, raw): (PathBuf, RawUnglueConfig)) -> std::result::Result<Self, Self::Error> {
        let css = validate_section("css", raw.css)?;
        let js = validate_section("js", raw.js)?;
        Ok(UnglueConfig::new_unchecked(path, css, js, raw.options))
    }
}

fn validate_section(
    name: &str,
    raw: Option<crate::types::RawSection>,
) -> Result<Section> {
    match raw {
        None => Ok(Section::Disabled),
        Some(raw) => Section::try_from(raw)
            .map_err(|msg| UnglueError::ConfigError(format!("\"{name}\" section: {msg}"))),
    }
}

/// Sanity checks that need the whole config rather than a single section.
pub fn validate_config(cfg: &UnglueConfig) -> Result<()> {
    if cfg.base_name().is_empty() {
        return Err(UnglueError::ConfigError(format!(
            "cannot derive an output name from {:?}",
            cfg.path()
        )));
    }
    Ok(())
}
