//! Configuration management for regform
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, LIST_MAX_HEIGHT_DEFAULT, LIST_MAX_HEIGHT_MAX, LIST_MAX_HEIGHT_MIN, UI_TICK_RATE_MS_DEFAULT,
    UI_TICK_RATE_MS_MAX, UI_TICK_RATE_MS_MIN,
};
use crate::states;
use crate::utils::date;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (needed for click-to-select and outside-click dismissal)
    pub mouse_enabled: bool,
    /// Event poll tick in milliseconds
    pub tick_rate_ms: u64,
    /// Maximum number of suggestion rows shown under a combobox
    pub list_max_height: u16,
}

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Owning component name, used to namespace generated ids
    pub component_name: String,
    /// Values accepted by the state combobox
    pub valid_states: Vec<String>,
    /// Date format for date fields; only MM/DD/YYYY is supported
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            tick_rate_ms: UI_TICK_RATE_MS_DEFAULT,
            list_max_height: LIST_MAX_HEIGHT_DEFAULT,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            component_name: "register".to_string(),
            valid_states: states::default_states(),
            date_format: date::FORM_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter, `None` if the configured level is unknown
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("regform.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("regform").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms < UI_TICK_RATE_MS_MIN || self.ui.tick_rate_ms > UI_TICK_RATE_MS_MAX {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                UI_TICK_RATE_MS_MIN,
                UI_TICK_RATE_MS_MAX,
                self.ui.tick_rate_ms
            );
        }

        if self.ui.list_max_height < LIST_MAX_HEIGHT_MIN || self.ui.list_max_height > LIST_MAX_HEIGHT_MAX {
            anyhow::bail!(
                "list_max_height must be between {} and {} rows, got {}",
                LIST_MAX_HEIGHT_MIN,
                LIST_MAX_HEIGHT_MAX,
                self.ui.list_max_height
            );
        }

        if self.form.component_name.trim().is_empty() {
            anyhow::bail!("component_name cannot be empty");
        }

        if self.form.valid_states.is_empty() {
            anyhow::bail!("valid_states must list at least one state");
        }

        if self.form.date_format != date::FORM_DATE_FORMAT {
            anyhow::bail!(
                "Unsupported date_format '{}': only '{}' is supported",
                self.form.date_format,
                date::FORM_DATE_FORMAT
            );
        }

        if self.logging.level_filter().is_none() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# regform Configuration File\n# Generated on {}\n\n",
            date::format_form_date(date::today())
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("regform"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
