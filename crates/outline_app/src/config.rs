use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use outline_core::OutlineConfig;

/// Read an `OutlineConfig` from a RON file. Omitted fields keep their defaults.
pub fn load(path: Option<&Path>) -> Result<OutlineConfig> {
    let Some(path) = path else {
        return Ok(OutlineConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: OutlineConfig =
        ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    config
        .parsed_root_margin()
        .with_context(|| format!("invalid root_margin {:?}", config.root_margin))?;
    Ok(config)
}
