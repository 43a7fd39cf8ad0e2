//! State machine behind the quick actions sheet
//!
//! Every user input becomes a [`SheetIntent`]. The controller applies it to the
//! current [`ModalState`] and calls the manager only when a flow completes:
//! a saved editor, or a confirmed delete/reset.

use tracing::debug;

use super::editor::EditorDraft;
use super::state::ModalState;
use crate::domain::{QuickAction, QuickActionId};
use crate::store::QuickActionManager;

/// User intent coming from the list, a row, the editor or a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetIntent {
    /// Open the editor in create mode
    Add,
    /// Open the editor for this action
    Edit(QuickAction),
    /// Ask for confirmation before deleting this action
    Delete(QuickAction),
    /// Ask for confirmation before resetting to defaults
    Reset,
    /// Submit the open editor
    Save,
    /// Close the open editor or dialog without side effects
    Cancel,
    /// Accept the open confirmation dialog
    Confirm,
    /// Close the whole sheet
    Done,
}

/// Result of handling one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOutcome {
    /// Intent does not apply in the current state
    Ignored,
    /// Modal state changed, store untouched
    ModalChanged,
    Added(QuickActionId),
    Updated(QuickActionId),
    Deleted(QuickActionId),
    /// Delete was confirmed but the action no longer exists
    AlreadyGone(QuickActionId),
    Reset,
    Dismissed,
}

#[derive(Debug, Default)]
pub struct SheetController {
    state: ModalState,
    dismissed: bool,
}

impl SheetController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Draft of the open editor, for in-place editing by the front end
    pub fn draft_mut(&mut self) -> Option<&mut EditorDraft> {
        match &mut self.state {
            ModalState::Adding(draft) | ModalState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Whether `Done` was handled; the host closes the sheet
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Show the sheet again after it was dismissed
    pub fn reopen(&mut self) {
        self.dismissed = false;
        self.state = ModalState::Closed;
    }

    pub fn handle<M>(&mut self, intent: SheetIntent, manager: &mut M) -> SheetOutcome
    where
        M: QuickActionManager + ?Sized,
    {
        let from = self.state.label();
        let outcome = self.transition(intent, manager);
        if outcome != SheetOutcome::Ignored {
            debug!("[sheet] {} -> {} ({:?})", from, self.state.label(), outcome);
        }
        outcome
    }

    fn transition<M>(&mut self, intent: SheetIntent, manager: &mut M) -> SheetOutcome
    where
        M: QuickActionManager + ?Sized,
    {
        match (std::mem::take(&mut self.state), intent) {
            (ModalState::Closed, SheetIntent::Add) => {
                self.state = ModalState::Adding(EditorDraft::blank());
                SheetOutcome::ModalChanged
            }
            (ModalState::Closed, SheetIntent::Edit(action)) => {
                // Edit what the manager holds now, not a stale row copy
                let Some(current) = manager.get(action.id) else {
                    return SheetOutcome::Ignored;
                };
                let draft = EditorDraft::from_action(&current);
                self.state = ModalState::Editing {
                    action: current,
                    draft,
                };
                SheetOutcome::ModalChanged
            }
            (ModalState::Closed, SheetIntent::Delete(action)) => {
                self.state = ModalState::ConfirmingDelete(action);
                SheetOutcome::ModalChanged
            }
            (ModalState::Closed, SheetIntent::Reset) => {
                self.state = ModalState::ConfirmingReset;
                SheetOutcome::ModalChanged
            }
            (ModalState::Closed, SheetIntent::Done) => {
                self.dismissed = true;
                SheetOutcome::Dismissed
            }

            (ModalState::Adding(draft), SheetIntent::Save) => {
                let id = manager.add_action(draft.to_new_action());
                SheetOutcome::Added(id)
            }
            (ModalState::Editing { action, draft }, SheetIntent::Save) => {
                let updated = draft.apply_to(&action);
                if manager.update_action(&updated) {
                    SheetOutcome::Updated(action.id)
                } else {
                    SheetOutcome::AlreadyGone(action.id)
                }
            }

            (ModalState::ConfirmingDelete(action), SheetIntent::Confirm) => {
                match manager.delete_action(action.id) {
                    Some(_) => SheetOutcome::Deleted(action.id),
                    None => SheetOutcome::AlreadyGone(action.id),
                }
            }
            (ModalState::ConfirmingReset, SheetIntent::Confirm) => {
                manager.reset_to_defaults();
                SheetOutcome::Reset
            }

            (ModalState::Closed, SheetIntent::Cancel) => SheetOutcome::Ignored,
            (_, SheetIntent::Cancel) => SheetOutcome::ModalChanged,

            (state, _) => {
                self.state = state;
                SheetOutcome::Ignored
            }
        }
    }
}
