use crate::error::{CliError, Result};
use changelog::ChangelogConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    changelog: ChangelogConfig,
}

/// Loads `[changelog]` defaults from a TOML file, or the built-in defaults without one
pub fn load(path: Option<&Path>) -> Result<ChangelogConfig> {
    let Some(path) = path else {
        return Ok(ChangelogConfig::default());
    };

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::Io(e).with_context(format!("Failed to read {}", path.display())))?;
    let file: ConfigFile =
        toml::from_str(&raw).map_err(|e| CliError::Config(path.to_path_buf(), e))?;
    debug!(?file, "loaded config");

    Ok(file.changelog)
}

/// Command line flags win over the config file
pub fn merge(mut config: ChangelogConfig, limit: Option<usize>, version: Option<String>) -> ChangelogConfig {
    if limit.is_some() {
        config.limit = limit;
    }
    if version.is_some() {
        config.version = version;
    }
    config
}
