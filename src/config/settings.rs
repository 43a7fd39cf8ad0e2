//! Settings sections of the config file

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the quick actions are stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Store file override; defaults to `~/.quick-actions/actions.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// GUI-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width in points
    #[serde(default = "default_width")]
    pub width: f32,

    /// Initial window height in points
    #[serde(default = "default_height")]
    pub height: f32,

    /// Characters of the prompt shown in each row before truncating
    #[serde(default = "default_prompt_preview_chars")]
    pub prompt_preview_chars: usize,
}

fn default_width() -> f32 {
    420.0
}

fn default_height() -> f32 {
    400.0
}

fn default_prompt_preview_chars() -> usize {
    60
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            prompt_preview_chars: default_prompt_preview_chars(),
        }
    }
}
