//! Generator configuration read from TOML files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon::GeneratorConfig;

/// Reads a TOML file; missing keys keep their defaults. The result is validated
/// so a bad file fails here rather than at generation time.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid config in {}", path.display()))?;
    log::debug!("loaded generator config from {}: {config:?}", path.display());
    Ok(config)
}

pub fn resolve_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(GeneratorConfig::default()),
    }
}
