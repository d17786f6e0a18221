//! Config command - inspect and initialize the configuration file

use crate::{
    SmartSearchError,
    cli::ConfigCommands,
    config::SmartSearchConfig,
};
use std::path::Path;

type Result<T> = std::result::Result<T, SmartSearchError>;

/// Execute a config subcommand
///
/// `path` is the configuration file in use; `config` its loaded contents.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn execute(
    command: ConfigCommands,
    config: &SmartSearchConfig,
    path: &Path,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                SmartSearchError::InvalidInput(format!("Failed to serialize config: {e}"))
            })?;
            print!("{rendered}");
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init => {
            if path.exists() {
                if !quiet {
                    println!("Configuration already exists at {}", path.display());
                }
            } else {
                SmartSearchConfig::default().save_to(path)?;
                if !quiet {
                    println!("Wrote default configuration to {}", path.display());
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        execute(ConfigCommands::Init, &SmartSearchConfig::default(), &path, true).unwrap();
        assert!(path.exists());

        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();
        execute(ConfigCommands::Init, &SmartSearchConfig::default(), &path, true).unwrap();
        let loaded = SmartSearchConfig::load_from(&path).unwrap();
        assert_eq!(loaded.log_level, "debug");
    }
}
