// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval for the board in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Ask before quitting while the form still holds unsubmitted text
    #[serde(default = "default_true_config")]
    pub confirm_quit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (RUST_LOG overrides it)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file for the TUI; relative paths resolve against the current directory
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true_config() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "projdash.log".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            confirm_quit: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("projdash")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("projdash")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    ///
    /// Runs before any log subscriber exists, so a failed default save is
    /// reported on stderr.
    pub fn load() -> Result<Self> {
        let (config, save_error) = Self::load_or_create(&Self::config_path()?)?;

        if let Some(e) = save_error {
            eprintln!("Warning: Could not create default config file: {:#}", e);
            eprintln!(
                "Using built-in defaults. Run 'projdash init-config' to create a config file."
            );
        }

        Ok(config)
    }

    /// Load `path`, writing defaults there first if it is missing.
    ///
    /// Saving is best effort: when it fails the defaults are still returned,
    /// together with the save error.
    pub fn load_or_create(path: &Path) -> Result<(Self, Option<anyhow::Error>)> {
        if path.exists() {
            return Ok((Self::load_from(path)?, None));
        }

        let config = Config::default();
        let save_error = config.save_to(path).err();
        Ok((config, save_error))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}
