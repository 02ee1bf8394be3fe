//! Path resolution for dolah configuration files.
//!
//! All dolah data is stored in `~/.dolah/`:
//! - `config.yaml` - Main configuration file

use std::path::{Path, PathBuf};

use crate::error::DolahError;

/// Paths to dolah configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.dolah/`
    pub root: PathBuf,
    /// Config file: `~/.dolah/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DolahError> {
        let home = std::env::var("HOME").map_err(|_| {
            DolahError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".dolah")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Create `dir` and its parents if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dir(dir: &Path) -> Result<(), DolahError> {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                DolahError::Config(format!("Failed to create directory {}: {e}", dir.display()))
            })?;
        }
        Ok(())
    }
}
