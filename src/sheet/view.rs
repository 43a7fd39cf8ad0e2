//! View model of the quick actions sheet
//!
//! [`render`] is a pure function of the modal state and the manager's sorted
//! actions. Front ends only draw the returned [`SheetModel`].

use super::state::ModalState;
use crate::domain::{glyph_for, ActionColor, QuickAction, QuickActionId};

pub const SHEET_TITLE: &str = "Manage Quick Actions";
pub const EMPTY_TITLE: &str = "No Quick Actions";
pub const EMPTY_HINT: &str = "Add actions to quickly send prompts to Claude";
pub const RESET_MESSAGE: &str =
    "This will replace all your quick actions with the defaults (Run App, Commit & Push).";

/// Rendering knobs taken from the GUI settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub prompt_preview_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prompt_preview_chars: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetModel {
    pub title: &'static str,
    pub content: SheetContent,
    pub overlay: Overlay,
    /// Footer buttons are disabled while a modal is open
    pub footer_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetContent {
    Empty { title: &'static str, hint: &'static str },
    Rows(Vec<RowModel>),
}

/// One list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    /// Source action, handed back with the row's edit/delete intents
    pub action: QuickAction,
    pub glyph: &'static str,
    pub color: ActionColor,
    pub name: String,
    pub prompt_preview: String,
}

impl RowModel {
    pub fn id(&self) -> QuickActionId {
        self.action.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Editor(EditorModel),
    Confirm(ConfirmDialog),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorModel {
    pub title: &'static str,
    pub save_label: &'static str,
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Delete,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub kind: ConfirmKind,
    pub title: &'static str,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

/// Build the view model for the current state
pub fn render(state: &ModalState, actions: &[QuickAction], options: &RenderOptions) -> SheetModel {
    let content = if actions.is_empty() {
        SheetContent::Empty {
            title: EMPTY_TITLE,
            hint: EMPTY_HINT,
        }
    } else {
        SheetContent::Rows(
            actions
                .iter()
                .map(|action| render_row(action, options))
                .collect(),
        )
    };

    SheetModel {
        title: SHEET_TITLE,
        content,
        overlay: render_overlay(state),
        footer_enabled: state.is_closed(),
    }
}

pub fn render_row(action: &QuickAction, options: &RenderOptions) -> RowModel {
    RowModel {
        action: action.clone(),
        glyph: glyph_for(&action.icon),
        color: action.color,
        name: action.name.clone(),
        prompt_preview: action.prompt_preview(options.prompt_preview_chars),
    }
}

fn render_overlay(state: &ModalState) -> Overlay {
    match state {
        ModalState::Closed => Overlay::None,
        ModalState::Adding(_) => Overlay::Editor(EditorModel {
            title: "New Quick Action",
            save_label: "Add",
            is_new: true,
        }),
        ModalState::Editing { .. } => Overlay::Editor(EditorModel {
            title: "Edit Quick Action",
            save_label: "Save",
            is_new: false,
        }),
        ModalState::ConfirmingDelete(action) => Overlay::Confirm(ConfirmDialog {
            kind: ConfirmKind::Delete,
            title: "Delete Quick Action?",
            message: format!(
                "Are you sure you want to delete \"{}\"? This cannot be undone.",
                action.name
            ),
            confirm_label: "Delete",
            cancel_label: "Cancel",
        }),
        ModalState::ConfirmingReset => Overlay::Confirm(ConfirmDialog {
            kind: ConfirmKind::Reset,
            title: "Reset Quick Actions?",
            message: RESET_MESSAGE.to_string(),
            confirm_label: "Reset",
            cancel_label: "Cancel",
        }),
    }
}
