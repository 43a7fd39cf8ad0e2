//! CLI command implementations

pub mod action;
pub mod init;
mod lookup;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use quick_actions::config::Config;
use quick_actions::store::{ActionPersistence, JsonFileBackend, MemoryBackend, QuickActionStore};

/// Resolved configuration shared by all commands
pub struct Context {
    pub config: Config,
    pub store_path: PathBuf,
    pub ephemeral: bool,
}

impl Context {
    /// Load the config (global by default) and resolve the store path.
    /// `store_override` wins over the `[store] path` setting.
    pub fn load(
        config_path: Option<&Path>,
        store_override: Option<PathBuf>,
        ephemeral: bool,
    ) -> Result<Self> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::global_config_path);
        let config = Config::load_or_default(&config_path)?;
        let store_path = store_override.unwrap_or_else(|| config.store_path());
        debug!(
            "Using config {} and store {}",
            config_path.display(),
            store_path.display()
        );

        Ok(Self {
            config,
            store_path,
            ephemeral,
        })
    }

    /// Open the store; ephemeral sessions start from the file but never write it
    pub fn open_store(&self) -> QuickActionStore {
        let file = JsonFileBackend::new(&self.store_path);
        if !self.ephemeral {
            return QuickActionStore::open(file);
        }

        let backend = match file.load() {
            Ok(Some(actions)) => MemoryBackend::with_actions(actions),
            Ok(None) => MemoryBackend::new(),
            Err(e) => {
                warn!("Ignoring unreadable store {}: {}", self.store_path.display(), e);
                MemoryBackend::new()
            }
        };
        QuickActionStore::open(backend)
    }
}
