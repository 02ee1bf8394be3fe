//! Configuration management for dolah.
//!
//! This module handles loading and saving configuration from `~/.dolah/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, CommandsConfig, Config, GeneralConfig};
