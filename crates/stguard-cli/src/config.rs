//! `stguard.toml` loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use stguard_check::ValidatorConfig;
use tracing::{debug, warn};

pub(crate) const CONFIG_FILES: &[&str] = &["stguard.toml", ".stguard.toml"];

/// Settings read from a project configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Config file path (if found).
    pub config_path: Option<PathBuf>,
    /// Validator tunables.
    pub validator: ValidatorConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    validator: ValidatorConfig,
}

impl CliConfig {
    /// Loads the config file found in `root`, or defaults when there is none.
    pub fn discover(root: &Path) -> Self {
        let Some(path) = find_config_file(root) else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            warn!("Failed to read stguard config at {}", path.display());
            return Self::default();
        };
        Self::from_contents(Some(path), &contents)
    }

    /// Loads an explicitly requested config file. A missing file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Ok(Self::from_contents(Some(path.to_path_buf()), &contents))
    }

    pub fn from_contents(config_path: Option<PathBuf>, contents: &str) -> Self {
        let parsed: ConfigFile = match toml::from_str(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                match &config_path {
                    Some(path) => warn!(
                        "Failed to parse stguard config at {}: {err}",
                        path.display()
                    ),
                    None => warn!("Failed to parse stguard config: {err}"),
                }
                return Self {
                    config_path,
                    validator: ValidatorConfig::default(),
                };
            }
        };
        if let Some(path) = &config_path {
            debug!("Loaded stguard config from {}", path.display());
        }
        Self {
            config_path,
            validator: parsed.validator,
        }
    }
}

pub(crate) fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}
