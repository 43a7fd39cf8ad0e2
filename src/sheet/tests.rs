use super::*;
use crate::domain::{
    default_actions, ActionColor, NewQuickAction, QuickAction, QuickActionId, DEFAULT_ICON,
};
use crate::store::QuickActionManager;

/// Manager that records every call made to it
#[derive(Default)]
struct RecordingManager {
    actions: Vec<QuickAction>,
    calls: Vec<&'static str>,
}

impl RecordingManager {
    fn with_defaults() -> Self {
        Self {
            actions: default_actions(),
            calls: Vec::new(),
        }
    }
}

impl QuickActionManager for RecordingManager {
    fn sorted_actions(&self) -> Vec<QuickAction> {
        self.actions.clone()
    }

    fn add_action(&mut self, new_action: NewQuickAction) -> QuickActionId {
        self.calls.push("add");
        let id = QuickActionId::new();
        let order = self.actions.len() as u32;
        self.actions.push(new_action.into_action(id, order));
        id
    }

    fn update_action(&mut self, action: &QuickAction) -> bool {
        self.calls.push("update");
        match self.actions.iter_mut().find(|a| a.id == action.id) {
            Some(existing) => {
                existing.apply_fields(action);
                true
            }
            None => false,
        }
    }

    fn delete_action(&mut self, id: QuickActionId) -> Option<QuickAction> {
        self.calls.push("delete");
        let index = self.actions.iter().position(|a| a.id == id)?;
        Some(self.actions.remove(index))
    }

    fn reset_to_defaults(&mut self) {
        self.calls.push("reset");
        self.actions = default_actions();
    }
}

#[test]
fn test_delete_requires_confirmation() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();
    let target = manager.actions[0].clone();

    let outcome = sheet.handle(SheetIntent::Delete(target.clone()), &mut manager);

    assert_eq!(outcome, SheetOutcome::ModalChanged);
    assert_eq!(sheet.state(), &ModalState::ConfirmingDelete(target.clone()));
    assert!(manager.calls.is_empty());

    let outcome = sheet.handle(SheetIntent::Confirm, &mut manager);

    assert_eq!(outcome, SheetOutcome::Deleted(target.id));
    assert_eq!(manager.calls, vec!["delete"]);
    assert!(sheet.state().is_closed());
    assert!(manager.actions.iter().all(|a| a.id != target.id));
}

#[test]
fn test_cancelled_delete_leaves_collection_unchanged() {
    let mut manager = RecordingManager::with_defaults();
    let before = manager.actions.clone();
    let mut sheet = SheetController::new();

    sheet.handle(SheetIntent::Delete(before[1].clone()), &mut manager);
    let outcome = sheet.handle(SheetIntent::Cancel, &mut manager);

    assert_eq!(outcome, SheetOutcome::ModalChanged);
    assert!(sheet.state().is_closed());
    assert!(manager.calls.is_empty());
    assert_eq!(manager.actions, before);
}

#[test]
fn test_confirmed_delete_of_vanished_action() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();
    let ghost = QuickAction::new("Ghost", "", "star", ActionColor::Gray);

    sheet.handle(SheetIntent::Delete(ghost.clone()), &mut manager);
    let outcome = sheet.handle(SheetIntent::Confirm, &mut manager);

    assert_eq!(outcome, SheetOutcome::AlreadyGone(ghost.id));
    assert!(sheet.state().is_closed());
    assert_eq!(manager.actions.len(), 2);
}

#[test]
fn test_reset_requires_confirmation() {
    let mut manager = RecordingManager::default();
    manager.actions.push(QuickAction::new("Custom", "x", "star", ActionColor::Pink));
    let mut sheet = SheetController::new();

    sheet.handle(SheetIntent::Reset, &mut manager);
    assert_eq!(sheet.state(), &ModalState::ConfirmingReset);
    assert!(manager.calls.is_empty());

    sheet.handle(SheetIntent::Cancel, &mut manager);
    assert!(manager.calls.is_empty());
    assert_eq!(manager.actions.len(), 1);

    sheet.handle(SheetIntent::Reset, &mut manager);
    let outcome = sheet.handle(SheetIntent::Confirm, &mut manager);

    assert_eq!(outcome, SheetOutcome::Reset);
    assert_eq!(manager.calls, vec!["reset"]);
    let names: Vec<String> = manager.actions.iter().map(|a| a.name.clone()).collect();
    assert_eq!(names, vec!["Run App", "Commit & Push"]);
}

#[test]
fn test_add_flow_adds_submitted_values() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();

    sheet.handle(SheetIntent::Add, &mut manager);
    {
        let draft = sheet.draft_mut().unwrap();
        assert_eq!(draft.icon, DEFAULT_ICON);
        draft.name = "Write Tests".to_string();
        draft.prompt = "Add unit tests for the current file".to_string();
        draft.icon = "checkmark.circle".to_string();
        draft.color = ActionColor::Teal;
    }
    let outcome = sheet.handle(SheetIntent::Save, &mut manager);

    let SheetOutcome::Added(id) = outcome else {
        panic!("expected Added, got {outcome:?}");
    };
    assert_eq!(manager.actions.len(), 3);
    let added = manager.actions.iter().find(|a| a.id == id).unwrap();
    assert_eq!(added.name, "Write Tests");
    assert_eq!(added.prompt, "Add unit tests for the current file");
    assert_eq!(added.icon, "checkmark.circle");
    assert_eq!(added.color, ActionColor::Teal);
    assert!(sheet.state().is_closed());
}

#[test]
fn test_add_flow_accepts_empty_fields() {
    let mut manager = RecordingManager::default();
    let mut sheet = SheetController::new();

    sheet.handle(SheetIntent::Add, &mut manager);
    let outcome = sheet.handle(SheetIntent::Save, &mut manager);

    assert!(matches!(outcome, SheetOutcome::Added(_)));
    assert_eq!(manager.actions[0].name, "");
    assert_eq!(manager.actions[0].prompt, "");
}

#[test]
fn test_edit_flow_replaces_fields_and_keeps_id() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();
    let target = manager.actions[1].clone();

    sheet.handle(SheetIntent::Edit(target.clone()), &mut manager);
    {
        let draft = sheet.draft_mut().unwrap();
        assert_eq!(draft.name, target.name);
        assert!(!draft.is_dirty());
        draft.name = "Ship It".to_string();
        draft.color = ActionColor::Red;
        assert!(draft.is_dirty());
    }
    let outcome = sheet.handle(SheetIntent::Save, &mut manager);

    assert_eq!(outcome, SheetOutcome::Updated(target.id));
    assert_eq!(manager.actions.len(), 2);
    let edited = &manager.actions[1];
    assert_eq!(edited.id, target.id);
    assert_eq!(edited.name, "Ship It");
    assert_eq!(edited.prompt, target.prompt);
    assert_eq!(edited.color, ActionColor::Red);
}

#[test]
fn test_cancel_editor_has_no_side_effects() {
    let mut manager = RecordingManager::with_defaults();
    let before = manager.actions.clone();
    let mut sheet = SheetController::new();

    sheet.handle(SheetIntent::Add, &mut manager);
    sheet.draft_mut().unwrap().name = "Discarded".to_string();
    sheet.handle(SheetIntent::Cancel, &mut manager);

    sheet.handle(SheetIntent::Edit(before[0].clone()), &mut manager);
    sheet.draft_mut().unwrap().prompt = "changed".to_string();
    sheet.handle(SheetIntent::Cancel, &mut manager);

    assert!(manager.calls.is_empty());
    assert_eq!(manager.actions, before);
    assert!(sheet.draft_mut().is_none());
}

#[test]
fn test_edit_of_unknown_action_is_ignored() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();
    let ghost = QuickAction::new("Ghost", "", "star", ActionColor::Gray);

    let outcome = sheet.handle(SheetIntent::Edit(ghost), &mut manager);

    assert_eq!(outcome, SheetOutcome::Ignored);
    assert!(sheet.state().is_closed());
}

#[test]
fn test_intents_outside_their_state_are_ignored() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();

    assert_eq!(sheet.handle(SheetIntent::Confirm, &mut manager), SheetOutcome::Ignored);
    assert_eq!(sheet.handle(SheetIntent::Save, &mut manager), SheetOutcome::Ignored);
    assert_eq!(sheet.handle(SheetIntent::Cancel, &mut manager), SheetOutcome::Ignored);

    sheet.handle(SheetIntent::Add, &mut manager);
    let target = manager.actions[0].clone();
    assert_eq!(
        sheet.handle(SheetIntent::Delete(target), &mut manager),
        SheetOutcome::Ignored
    );
    assert_eq!(sheet.handle(SheetIntent::Confirm, &mut manager), SheetOutcome::Ignored);
    assert_eq!(sheet.handle(SheetIntent::Done, &mut manager), SheetOutcome::Ignored);
    assert!(matches!(sheet.state(), ModalState::Adding(_)));

    sheet.handle(SheetIntent::Cancel, &mut manager);
    sheet.handle(SheetIntent::Reset, &mut manager);
    assert_eq!(sheet.handle(SheetIntent::Save, &mut manager), SheetOutcome::Ignored);
    assert_eq!(sheet.state(), &ModalState::ConfirmingReset);
    assert!(manager.calls.is_empty());
}

#[test]
fn test_done_dismisses_and_reopen_restores() {
    let mut manager = RecordingManager::with_defaults();
    let mut sheet = SheetController::new();

    assert_eq!(sheet.handle(SheetIntent::Done, &mut manager), SheetOutcome::Dismissed);
    assert!(sheet.is_dismissed());

    sheet.reopen();
    assert!(!sheet.is_dismissed());
}

#[test]
fn test_render_one_row_per_action_in_order() {
    let actions = vec![
        QuickAction::new("First", "one", "play.fill", ActionColor::Green),
        QuickAction::new("Second", "two", "unknown.icon", ActionColor::Blue),
        QuickAction::new("Third", "three", "hammer", ActionColor::Orange),
    ];

    let model = render(&ModalState::Closed, &actions, &RenderOptions::default());

    let SheetContent::Rows(rows) = &model.content else {
        panic!("expected rows");
    };
    let ids: Vec<QuickActionId> = rows.iter().map(|r| r.id()).collect();
    let expected: Vec<QuickActionId> = actions.iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(rows[0].glyph, "▶");
    assert_eq!(rows[1].glyph, crate::domain::FALLBACK_GLYPH);
    assert_eq!(model.overlay, Overlay::None);
    assert!(model.footer_enabled);
}

#[test]
fn test_render_empty_state() {
    let model = render(&ModalState::Closed, &[], &RenderOptions::default());
    assert_eq!(
        model.content,
        SheetContent::Empty {
            title: EMPTY_TITLE,
            hint: EMPTY_HINT
        }
    );
    assert_eq!(model.title, SHEET_TITLE);
}

#[test]
fn test_render_truncates_prompt_preview() {
    let action = QuickAction::new("Long", "a".repeat(100), "star", ActionColor::Blue);
    let options = RenderOptions {
        prompt_preview_chars: 10,
    };

    let row = render_row(&action, &options);

    assert_eq!(row.prompt_preview.chars().count(), 11);
    assert!(row.prompt_preview.ends_with('…'));
}

#[test]
fn test_render_overlays_follow_state() {
    let action = QuickAction::new("Deploy", "deploy it", "star", ActionColor::Red);
    let options = RenderOptions::default();

    let model = render(&ModalState::ConfirmingDelete(action.clone()), &[], &options);
    let Overlay::Confirm(dialog) = model.overlay else {
        panic!("expected confirm dialog");
    };
    assert_eq!(dialog.kind, ConfirmKind::Delete);
    assert_eq!(dialog.title, "Delete Quick Action?");
    assert_eq!(
        dialog.message,
        "Are you sure you want to delete \"Deploy\"? This cannot be undone."
    );
    assert!(!model.footer_enabled);

    let model = render(&ModalState::ConfirmingReset, &[], &options);
    let Overlay::Confirm(dialog) = model.overlay else {
        panic!("expected confirm dialog");
    };
    assert_eq!(dialog.message, RESET_MESSAGE);
    assert_eq!(dialog.confirm_label, "Reset");

    let model = render(&ModalState::Adding(EditorDraft::blank()), &[], &options);
    assert!(matches!(model.overlay, Overlay::Editor(EditorModel { is_new: true, .. })));

    let editing = ModalState::Editing {
        draft: EditorDraft::from_action(&action),
        action,
    };
    let model = render(&editing, &[], &options);
    assert!(matches!(model.overlay, Overlay::Editor(EditorModel { is_new: false, .. })));
}
