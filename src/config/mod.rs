//! Configuration loading and management

mod io;
mod settings;

pub use io::CONFIG_HEADER;
pub use settings::{GuiSettings, StoreSettings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sheet::RenderOptions;

/// Main configuration structure (`~/.quick-actions/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Store location
    #[serde(default)]
    pub store: StoreSettings,

    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,
}

impl Config {
    /// Store file path: explicit override, else `actions.json` in the global dir
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("actions.json"))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            prompt_preview_chars: self.gui.prompt_preview_chars.max(1),
        }
    }
}

#[cfg(test)]
mod tests;
