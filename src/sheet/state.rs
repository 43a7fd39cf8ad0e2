use super::editor::EditorDraft;
use crate::domain::QuickAction;

/// Which modal, if any, is in front of the quick action list.
///
/// A single value instead of separate flags, so two modals can never be open at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Editor in create mode
    Adding(EditorDraft),
    /// Editor in edit mode for `action`
    Editing {
        action: QuickAction,
        draft: EditorDraft,
    },
    ConfirmingDelete(QuickAction),
    ConfirmingReset,
}

impl ModalState {
    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    pub fn is_editor(&self) -> bool {
        matches!(self, ModalState::Adding(_) | ModalState::Editing { .. })
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, ModalState::ConfirmingDelete(_) | ModalState::ConfirmingReset)
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Adding(_) => "adding",
            ModalState::Editing { .. } => "editing",
            ModalState::ConfirmingDelete(_) => "confirming-delete",
            ModalState::ConfirmingReset => "confirming-reset",
        }
    }
}
