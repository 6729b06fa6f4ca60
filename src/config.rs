use crate::constants::CONFIG_FILENAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional project settings read from `boba-docs.yaml`. Every path is
/// relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub lessons_dir: Option<PathBuf>,
    pub reference_dir: Option<PathBuf>,
    pub exercises_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub combined_output: Option<PathBuf>,
    pub title: Option<String>,
    pub recursive_exercises: Option<bool>,
}

pub fn load_config(current_dir: &Path) -> Result<Option<Config>> {
    let config_path = current_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config_content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = serde_yaml::from_str(&config_content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}
