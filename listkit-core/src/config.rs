use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Template written by `listkit config init`
pub const CONFIG_TEMPLATE: &str = r#"# listkit configuration

[list]
# Dataset shown when none is given on the command line
default_dataset = "documents"
# Sort key applied when --sort is omitted (must be a sort option of the dataset)
# default_sort = "date"

[panel]
# Where panel widths are persisted, keyed by storage key
store_path = "${HOME}/.listkit/panel-widths.json"

[logging]
# Default log level when RUST_LOG is unset
level = "info"
"#;

/// Centralized configuration for listkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListkitConfig {
    pub list: ListConfig,
    pub panel: PanelConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub default_dataset: String,
    pub default_sort: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_dataset: "documents".to_string(),
            default_sort: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub store_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ListkitConfig {
    /// Load config from `$LISTKIT_CONFIG` or ~/.listkit/config.toml
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::debug!(path = ?config_path, "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let mut config: Self = toml::from_str(&content)
            .context("Failed to parse config file (invalid TOML)")?;

        config.expand_variables();

        Ok(config)
    }

    /// Get config file path, honoring LISTKIT_CONFIG
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("LISTKIT_CONFIG") {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        Self::home_dir().join("config.toml")
    }

    /// ~/.listkit
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".listkit")
    }

    /// Width store location, falling back to ~/.listkit/panel-widths.json
    pub fn store_path(&self) -> PathBuf {
        self.panel
            .store_path
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("panel-widths.json"))
    }

    /// Expand ${var} references in paths
    fn expand_variables(&mut self) {
        let mut vars = HashMap::new();
        let home = dirs::home_dir()
            .map(|h| h.display().to_string())
            .or_else(|| env::var("HOME").ok())
            .unwrap_or_default();
        vars.insert("HOME".to_string(), home);

        if let Some(ref path) = self.panel.store_path {
            self.panel.store_path = Some(Self::expand_path(path, &vars));
        }
    }

    fn expand_path(path: &Path, vars: &HashMap<String, String>) -> PathBuf {
        PathBuf::from(Self::expand_string(&path.display().to_string(), vars))
    }

    /// Expand ${var} references in a string
    fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
        let mut result = s.to_string();

        for (key, value) in vars {
            let pattern = format!("${{{}}}", key);
            result = result.replace(&pattern, value);
        }

        result
    }
}
