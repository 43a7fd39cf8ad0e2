//! List, rows, header and footer of the quick actions sheet

use eframe::egui::{self, RichText, ScrollArea, Vec2};

use super::theme::{
    action_color, ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::sheet::{RowModel, SheetContent, SheetIntent, SheetModel};

/// Header bar with the title and the Done button
pub fn render_header(ctx: &egui::Context, model: &SheetModel, intents: &mut Vec<SheetIntent>) {
    egui::TopBottomPanel::top("quick_actions_header")
        .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(model.title).strong().size(16.0).color(TEXT_PRIMARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let done = ui.add_enabled(
                        model.footer_enabled,
                        egui::Button::new(RichText::new("Done").color(ACCENT_CYAN)).frame(false),
                    );
                    if done.clicked() {
                        intents.push(SheetIntent::Done);
                    }
                });
            });
        });
}

/// Footer bar with Reset / Add buttons and the status line
pub fn render_footer(
    ctx: &egui::Context,
    model: &SheetModel,
    status: Option<&(String, bool)>,
    intents: &mut Vec<SheetIntent>,
) {
    egui::TopBottomPanel::bottom("quick_actions_footer")
        .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(12.0))
        .show(ctx, |ui| {
            if let Some((message, is_error)) = status {
                let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
                ui.label(RichText::new(message).small().color(color));
                ui.add_space(6.0);
            }

            ui.horizontal(|ui| {
                let reset = ui.add_enabled(
                    model.footer_enabled,
                    egui::Button::new(RichText::new("↺ Reset to Defaults").color(TEXT_DIM))
                        .frame(false),
                );
                if reset.clicked() {
                    intents.push(SheetIntent::Reset);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let add = ui.add_enabled(
                        model.footer_enabled,
                        egui::Button::new(RichText::new("+ Add Quick Action").color(BG_SECONDARY))
                            .fill(ACCENT_CYAN),
                    );
                    if add.clicked() {
                        intents.push(SheetIntent::Add);
                    }
                });
            });
        });
}

/// Central list: one row per action, or the empty state
pub fn render_content(ctx: &egui::Context, model: &SheetModel, intents: &mut Vec<SheetIntent>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(12.0))
        .show(ctx, |ui| match &model.content {
            SheetContent::Empty { title, hint } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label(RichText::new("⚡").size(40.0).color(TEXT_MUTED));
                    ui.add_space(12.0);
                    ui.label(RichText::new(*title).strong().color(TEXT_DIM));
                    ui.label(RichText::new(*hint).small().color(TEXT_MUTED));
                });
            }
            SheetContent::Rows(rows) => {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for row in rows {
                            render_row(ui, row, model.footer_enabled, intents);
                            ui.add_space(8.0);
                        }
                    });
            }
        });
}

/// One action: icon, name, prompt preview, edit and delete triggers
fn render_row(
    ui: &mut egui::Ui,
    row: &RowModel,
    enabled: bool,
    intents: &mut Vec<SheetIntent>,
) {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (icon_rect, _) = ui.allocate_exact_size(Vec2::splat(24.0), egui::Sense::hover());
                ui.painter().text(
                    icon_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    row.glyph,
                    egui::FontId::proportional(16.0),
                    action_color(row.color),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete = ui
                        .add_enabled(
                            enabled,
                            egui::Button::new(RichText::new("🗑").color(ACCENT_RED.gamma_multiply(0.7)))
                                .frame(false),
                        )
                        .on_hover_text("Delete action");
                    if delete.clicked() {
                        intents.push(SheetIntent::Delete(row.action.clone()));
                    }

                    let edit = ui
                        .add_enabled(
                            enabled,
                            egui::Button::new(RichText::new("✏").color(TEXT_DIM)).frame(false),
                        )
                        .on_hover_text("Edit action");
                    if edit.clicked() {
                        intents.push(SheetIntent::Edit(row.action.clone()));
                    }

                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(&row.name).strong().color(TEXT_PRIMARY))
                                .truncate(),
                        );
                        ui.add(
                            egui::Label::new(
                                RichText::new(&row.prompt_preview).small().color(TEXT_MUTED),
                            )
                            .truncate(),
                        );
                    });
                });
            });
        });
}
