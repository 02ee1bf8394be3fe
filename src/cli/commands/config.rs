//! `dolah config` implementation.

use std::path::Path;

use crate::cli::args::ConfigCommands;
use crate::config::Config;
use crate::error::DolahError;

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or written, or if
/// `init` would overwrite an existing file without `--force`.
pub fn config(config: &Config, path: &Path, command: ConfigCommands) -> Result<String, DolahError> {
    match command {
        ConfigCommands::Show => config.to_yaml(),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(DolahError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to_path(path)?;
            Ok(format!("Wrote {}", path.display()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show() {
        let temp_dir = TempDir::new().unwrap();
        let output = config(
            &Config::default(),
            &temp_dir.path().join("config.yaml"),
            ConfigCommands::Show,
        )
        .unwrap();
        assert!(output.contains("default_output: pretty"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        config(&Config::default(), &path, ConfigCommands::Init { force: false }).unwrap();
        assert!(path.exists());

        let again = config(&Config::default(), &path, ConfigCommands::Init { force: false });
        assert!(matches!(again, Err(DolahError::Config(_))));

        config(&Config::default(), &path, ConfigCommands::Init { force: true }).unwrap();
    }
}
