//! Editor draft for creating or editing a quick action

use crate::domain::{ActionColor, NewQuickAction, QuickAction, DEFAULT_ICON};

/// Form contents of the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDraft {
    pub name: String,
    pub prompt: String,
    pub icon: String,
    pub color: ActionColor,
    initial: NewQuickAction,
}

impl EditorDraft {
    /// Empty draft for create mode
    pub fn blank() -> Self {
        Self::from_fields(NewQuickAction {
            name: String::new(),
            prompt: String::new(),
            icon: DEFAULT_ICON.to_string(),
            color: ActionColor::default(),
        })
    }

    /// Draft prefilled from an existing action for edit mode
    pub fn from_action(action: &QuickAction) -> Self {
        Self::from_fields(action.fields())
    }

    fn from_fields(fields: NewQuickAction) -> Self {
        Self {
            name: fields.name.clone(),
            prompt: fields.prompt.clone(),
            icon: fields.icon.clone(),
            color: fields.color,
            initial: fields,
        }
    }

    /// Submitted values as a new action
    pub fn to_new_action(&self) -> NewQuickAction {
        NewQuickAction {
            name: self.name.clone(),
            prompt: self.prompt.clone(),
            icon: self.icon.clone(),
            color: self.color,
        }
    }

    /// `action` with the submitted values; id and sort order are kept
    pub fn apply_to(&self, action: &QuickAction) -> QuickAction {
        self.to_new_action().into_action(action.id, action.sort_order)
    }

    /// Whether any field differs from what the editor was opened with
    pub fn is_dirty(&self) -> bool {
        self.to_new_action() != self.initial
    }
}

impl Default for EditorDraft {
    fn default() -> Self {
        Self::blank()
    }
}
