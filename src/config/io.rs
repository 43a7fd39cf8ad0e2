//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::Config;
use crate::atomic_file;

impl Config {
    /// Get the global config directory path (~/.quick-actions/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quick-actions")
    }

    /// Get the global config file path (~/.quick-actions/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration, using defaults when the file does not exist.
    ///
    /// A file that exists but cannot be parsed is an error; silently
    /// replacing it would lose the user's settings.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Save configuration to a file, preceded by a short header comment.
    ///
    /// The write holds an exclusive lock on `<file>.lock` and goes through a
    /// temp file that is renamed over the target.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_locked(path, &format!("{CONFIG_HEADER}\n{body}"))?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Comment block written at the top of generated config files
pub const CONFIG_HEADER: &str = r#"# Quick Actions configuration
#
# [store]
#   path                  - quick actions file (default: ~/.quick-actions/actions.json)
# [gui]
#   width, height         - initial window size in points
#   prompt_preview_chars  - characters of the prompt shown under each action
"#;

fn write_locked(path: &Path, content: &str) -> Result<()> {
    atomic_file::ensure_parent(path)
        .with_context(|| format!("Failed to create config directory for {}", path.display()))?;
    let lock = atomic_file::FileLock::acquire(path)
        .with_context(|| format!("Failed to lock config file: {}", path.display()))?;
    atomic_file::replace(&lock, path, content.as_bytes())
        .with_context(|| format!("Failed to replace config file: {}", path.display()))
}
