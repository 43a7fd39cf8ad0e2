//! Confirmation dialog for destructive actions (delete one, reset all)

use eframe::egui::{self, RichText, Vec2};

use super::theme::{ACCENT_RED, ACCENT_YELLOW, BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};
use crate::sheet::{ConfirmDialog, SheetIntent};

/// Render the dialog; returns Confirm or Cancel when pressed
pub fn render_confirm(ctx: &egui::Context, dialog: &ConfirmDialog) -> Option<SheetIntent> {
    let mut intent = None;

    egui::Window::new(dialog.title)
        .id(egui::Id::new("quick_action_confirm"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .fixed_size(Vec2::new(340.0, 140.0))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("⚠ {}", dialog.title))
                    .size(16.0)
                    .color(ACCENT_YELLOW),
            );
            ui.add_space(12.0);

            egui::Frame::NONE
                .fill(BG_PRIMARY)
                .corner_radius(4.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(&dialog.message).color(TEXT_PRIMARY));
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(dialog.cancel_label).color(TEXT_DIM))
                    .clicked()
                {
                    intent = Some(SheetIntent::Cancel);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new(dialog.confirm_label).color(ACCENT_RED).strong())
                        .clicked()
                    {
                        intent = Some(SheetIntent::Confirm);
                    }
                });
            });
        });

    intent
}
