//! Configuration settings for dolah.
//!
//! Settings are loaded from `~/.dolah/config.yaml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::command::CommandKind;
use crate::config::Paths;
use crate::error::DolahError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Command keyword settings.
    pub commands: CommandsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Plain text.
    Never,
}

impl ColorSetting {
    /// Apply this setting to all colored output of the process.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Command keyword settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommandsConfig {
    /// Extra aliases, mapping the words typed to a command keyword.
    ///
    /// Aliases may contain spaces (`"mark done": done`).
    pub aliases: BTreeMap<String, String>,
    /// Commands that are recognized but refused.
    pub disabled: Vec<CommandKind>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, DolahError> {
        if !path.exists() {
            tracing::trace!("No config file at: {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DolahError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config = serde_yaml::from_str(&contents).map_err(|e| {
            DolahError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        tracing::debug!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), DolahError> {
        let contents = self.to_yaml()?;

        if let Some(parent) = path.parent() {
            Paths::ensure_dir(parent)?;
        }

        std::fs::write(path, contents).map_err(|e| {
            DolahError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, DolahError> {
        serde_yaml::to_string(self)
            .map_err(|e| DolahError::Config(format!("Failed to serialize config: {e}")))
    }
}
