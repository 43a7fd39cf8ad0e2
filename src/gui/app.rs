//! Quick actions window
//!
//! Each frame the app renders the sheet model from the controller state and
//! the store, collects the intents produced by clicks, and applies them
//! through the controller once drawing is done.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use eframe::egui;
use tracing::info;

use super::confirm::render_confirm;
use super::editor::render_editor;
use super::sheet::{render_content, render_footer, render_header};
use super::theme::apply_theme;
use crate::domain::QuickActionId;
use crate::sheet::{render, Overlay, RenderOptions, SheetController, SheetIntent, SheetOutcome};
use crate::store::{QuickActionStore, StoreEvent};

pub struct QuickActionsApp {
    store: QuickActionStore,
    sheet: SheetController,
    options: RenderOptions,
    /// Events pushed by the store subscription, drained once per frame
    events: Rc<RefCell<VecDeque<StoreEvent>>>,
    /// Footer status line: (message, is_error)
    status: Option<(String, bool)>,
    theme_applied: bool,
}

impl QuickActionsApp {
    pub fn new(mut store: QuickActionStore, options: RenderOptions) -> Self {
        let events: Rc<RefCell<VecDeque<StoreEvent>>> = Rc::default();
        let sink = Rc::clone(&events);
        store.subscribe(move |event, _snapshot| {
            sink.borrow_mut().push_back(*event);
        });

        let status = store
            .last_persist_error()
            .map(|e| (format!("Could not load quick actions: {e}"), true));

        Self {
            store,
            sheet: SheetController::new(),
            options,
            events,
            status,
            theme_applied: false,
        }
    }

    pub fn store(&self) -> &QuickActionStore {
        &self.store
    }

    pub fn sheet(&self) -> &SheetController {
        &self.sheet
    }

    /// Apply one intent; returns the controller's outcome
    pub fn apply_intent(&mut self, intent: SheetIntent) -> SheetOutcome {
        let outcome = self.sheet.handle(intent, &mut self.store);
        self.drain_store_events();
        outcome
    }

    /// Draw one frame. Returns `true` when the sheet asked to close.
    pub fn ui(&mut self, ctx: &egui::Context) -> bool {
        if !self.theme_applied {
            apply_theme(ctx);
            self.theme_applied = true;
        }

        let mut intents = Vec::new();
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            intents.push(SheetIntent::Cancel);
        }

        let actions = self.store.sorted_actions();
        let model = render(self.sheet.state(), &actions, &self.options);

        render_header(ctx, &model, &mut intents);
        render_footer(ctx, &model, self.status.as_ref(), &mut intents);
        render_content(ctx, &model, &mut intents);

        match &model.overlay {
            Overlay::None => {}
            Overlay::Editor(editor) => {
                if let Some(draft) = self.sheet.draft_mut() {
                    intents.extend(render_editor(ctx, editor, draft));
                }
            }
            Overlay::Confirm(dialog) => {
                intents.extend(render_confirm(ctx, dialog));
            }
        }

        let mut close = false;
        for intent in intents {
            if self.apply_intent(intent) == SheetOutcome::Dismissed {
                close = true;
            }
        }
        close
    }

    fn drain_store_events(&mut self) {
        let events: Vec<StoreEvent> = self.events.borrow_mut().drain(..).collect();
        for event in events {
            self.status = Some(self.describe_event(&event));
        }
        if let Some(e) = self.store.last_persist_error() {
            self.status = Some((format!("Changes not saved: {e}"), true));
        }
    }

    fn describe_event(&self, event: &StoreEvent) -> (String, bool) {
        let name = |id: &QuickActionId| {
            self.store
                .get(*id)
                .map(|a| a.name.clone())
                .unwrap_or_default()
        };
        let message = match event {
            StoreEvent::Added(id) => format!("Added \"{}\"", name(id)),
            StoreEvent::Updated(id) => format!("Saved \"{}\"", name(id)),
            StoreEvent::Deleted(_) => "Quick action deleted".to_string(),
            StoreEvent::Moved(id) => format!("Moved \"{}\"", name(id)),
            StoreEvent::Reset => "Restored default quick actions".to_string(),
        };
        (message, false)
    }
}

impl eframe::App for QuickActionsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui(ctx) {
            info!("Closing quick actions ({} saved)", self.store.len());
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

#[cfg(test)]
mod tests;
