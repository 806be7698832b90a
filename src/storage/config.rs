//! Configuration handling for journaltxt
//!
//! Build defaults are read from `~/.config/journaltxt/config.toml` (or the
//! platform equivalent), or from a file given with `--config`. Command-line
//! flags always win over the file.
//!
//! ```toml
//! [build]
//! output = "_posts"
//! date = true
//! format = "text"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for build reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Defaults for `journaltxt` builds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory receiving generated posts
    pub output: PathBuf,

    /// Append the entry date to post titles
    pub date: bool,

    /// Report format
    pub format: OutputFormat,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            date: true,
            format: OutputFormat::Text,
        }
    }
}

/// Combined configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub build: BuildConfig,

    /// File the configuration was loaded from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from an explicit file, or the global location
    ///
    /// An explicit file must exist; a missing global file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => match Self::global_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "journaltxt", "journaltxt")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Reads configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.source = Some(path.to_path_buf());
        Ok(config)
    }
}
