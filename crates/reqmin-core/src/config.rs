use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use reqmin_util::errors::{ReqminError, ReqminResult};

/// User configuration loaded from `~/.reqmin/config.toml` or `--config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReqminConfig {
    #[serde(default)]
    pub cli: CliConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Interactive prompt settings from `[cli]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

fn default_prompt() -> String {
    "Enter version inequalities: ".to_string()
}

/// Logging settings from `[log]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl ReqminConfig {
    /// Load configuration from an explicit file.
    pub fn load(path: &Path) -> ReqminResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ReqminError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config = toml::from_str(&content).map_err(|e| ReqminError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `~/.reqmin/config.toml`, or return defaults if the file doesn't exist.
    pub fn load_default() -> ReqminResult<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the reqmin data directory (`~/.reqmin/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".reqmin")
}
