use super::*;
use crate::domain::{ActionColor, QuickAction};

fn run_frame(app: &mut QuickActionsApp) -> bool {
    let ctx = egui::Context::default();
    let mut close = false;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        close = app.ui(ctx);
    });
    close
}

fn app() -> QuickActionsApp {
    QuickActionsApp::new(QuickActionStore::in_memory(), RenderOptions::default())
}

#[test]
fn test_frames_render_in_every_modal_state() {
    let mut app = app();
    assert!(!run_frame(&mut app));

    app.apply_intent(SheetIntent::Add);
    assert!(!run_frame(&mut app));
    app.apply_intent(SheetIntent::Cancel);

    let first = app.store().sorted_actions()[0].clone();
    app.apply_intent(SheetIntent::Edit(first.clone()));
    assert!(!run_frame(&mut app));
    app.apply_intent(SheetIntent::Cancel);

    app.apply_intent(SheetIntent::Delete(first));
    assert!(!run_frame(&mut app));
    app.apply_intent(SheetIntent::Cancel);

    app.apply_intent(SheetIntent::Reset);
    assert!(!run_frame(&mut app));

    assert_eq!(app.store().revision(), 0);
}

#[test]
fn test_empty_store_renders() {
    let mut app = app();
    let ids: Vec<_> = app.store().sorted_actions().iter().map(|a| a.id).collect();
    for id in ids {
        let action = app.store().get(id).cloned().unwrap();
        app.apply_intent(SheetIntent::Delete(action));
        app.apply_intent(SheetIntent::Confirm);
    }
    assert!(app.store().is_empty());
    assert!(!run_frame(&mut app));
}

#[test]
fn test_store_events_update_status() {
    let mut app = app();

    app.apply_intent(SheetIntent::Add);
    app.sheet.draft_mut().unwrap().name = "Deploy".to_string();
    app.apply_intent(SheetIntent::Save);

    assert_eq!(app.status, Some(("Added \"Deploy\"".to_string(), false)));

    app.apply_intent(SheetIntent::Reset);
    app.apply_intent(SheetIntent::Confirm);
    assert_eq!(
        app.status,
        Some(("Restored default quick actions".to_string(), false))
    );
}

#[test]
fn test_done_requests_close() {
    let mut app = app();
    assert_eq!(app.apply_intent(SheetIntent::Done), SheetOutcome::Dismissed);
    assert!(app.sheet().is_dismissed());
}

#[test]
fn test_long_prompt_row_renders() {
    let mut store = QuickActionStore::in_memory();
    store.add_action(
        QuickAction::new("Long", "x".repeat(500), "unknown", ActionColor::Yellow).fields(),
    );
    let mut app = QuickActionsApp::new(store, RenderOptions { prompt_preview_chars: 5 });
    assert!(!run_frame(&mut app));
}
