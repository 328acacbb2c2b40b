use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "glance-editor.config.json";

/// Editor settings file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Dashboard config edited when no file is given
    #[serde(default = "default_config_file")]
    pub config_file: String,

    /// Undo depth for editing sessions (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Name of the first page written by `init`
    #[serde(default = "default_page_name")]
    pub default_page_name: String,
}

fn default_config_file() -> String {
    "glance.yml".to_string()
}

fn default_history_limit() -> usize {
    100
}

fn default_page_name() -> String {
    "Home".to_string()
}

impl Config {
    /// Load settings from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Dashboard file to operate on: the explicit one, else the configured one
    pub fn resolve_file(&self, cwd: &Path, file: Option<&Path>) -> PathBuf {
        match file {
            Some(file) => cwd.join(file),
            None => cwd.join(&self.config_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            history_limit: default_history_limit(),
            default_page_name: default_page_name(),
        }
    }
}
