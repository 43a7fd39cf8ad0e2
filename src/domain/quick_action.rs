use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ActionColor;

/// Stable identifier of a quick action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickActionId(Uuid);

impl QuickActionId {
    /// Allocate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First 8 hex characters, used for compact display in lists
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for QuickActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuickActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for QuickActionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A user-defined shortcut that sends a preset prompt to a downstream target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Immutable, unique within a store
    pub id: QuickActionId,

    /// Display name (may be empty)
    pub name: String,

    /// Prompt text sent when the action is triggered (may be empty)
    pub prompt: String,

    /// Symbolic icon name (e.g. "play.fill")
    pub icon: String,

    /// Accent color
    #[serde(default)]
    pub color: ActionColor,

    /// Position in the sorted view
    #[serde(default)]
    pub sort_order: u32,
}

impl QuickAction {
    /// Create a new action with a freshly allocated id
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        icon: impl Into<String>,
        color: ActionColor,
    ) -> Self {
        Self {
            id: QuickActionId::new(),
            name: name.into(),
            prompt: prompt.into(),
            icon: icon.into(),
            color,
            sort_order: 0,
        }
    }

    pub fn with_sort_order(mut self, sort_order: u32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Copy the user-editable fields from `other`, keeping id and sort order
    pub fn apply_fields(&mut self, other: &QuickAction) {
        self.name = other.name.clone();
        self.prompt = other.prompt.clone();
        self.icon = other.icon.clone();
        self.color = other.color;
    }

    /// The user-editable fields of this action
    pub fn fields(&self) -> NewQuickAction {
        NewQuickAction {
            name: self.name.clone(),
            prompt: self.prompt.clone(),
            icon: self.icon.clone(),
            color: self.color,
        }
    }

    /// First line of the prompt, cut to `max_chars` characters with a trailing ellipsis
    pub fn prompt_preview(&self, max_chars: usize) -> String {
        let first_line = self.prompt.lines().next().unwrap_or("").trim_end();
        let truncated = first_line.chars().count() > max_chars;
        let more_lines = self.prompt.trim_end().lines().nth(1).is_some();

        if truncated {
            let mut preview: String = first_line.chars().take(max_chars).collect();
            preview.push('…');
            preview
        } else if more_lines {
            format!("{first_line}…")
        } else {
            first_line.to_string()
        }
    }
}

/// Fields of an action that does not exist yet; the store allocates id and order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewQuickAction {
    pub name: String,
    pub prompt: String,
    pub icon: String,
    pub color: ActionColor,
}

impl NewQuickAction {
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        icon: impl Into<String>,
        color: ActionColor,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            icon: icon.into(),
            color,
        }
    }

    /// Materialize with the given identity
    pub fn into_action(self, id: QuickActionId, sort_order: u32) -> QuickAction {
        QuickAction {
            id,
            name: self.name,
            prompt: self.prompt,
            icon: self.icon,
            color: self.color,
            sort_order,
        }
    }
}
