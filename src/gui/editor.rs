//! Editor window for creating or editing a quick action

use eframe::egui::{self, RichText, Stroke, Vec2};

use super::theme::{action_color, ACCENT_CYAN, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::{ActionColor, ICON_CATALOG};
use crate::sheet::{EditorDraft, EditorModel, SheetIntent};

/// Render the editor over the list; returns Save or Cancel when pressed
pub fn render_editor(
    ctx: &egui::Context,
    model: &EditorModel,
    draft: &mut EditorDraft,
) -> Option<SheetIntent> {
    let mut intent = None;

    egui::Window::new(model.title)
        .id(egui::Id::new("quick_action_editor"))
        .collapsible(false)
        .resizable(false)
        .fixed_size(Vec2::new(360.0, 300.0))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

            ui.label(RichText::new("Name").color(TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut draft.name)
                    .text_color(TEXT_PRIMARY)
                    .hint_text("Run App")
                    .desired_width(f32::INFINITY),
            );

            ui.label(RichText::new("Prompt").color(TEXT_MUTED));
            ui.add(
                egui::TextEdit::multiline(&mut draft.prompt)
                    .text_color(TEXT_PRIMARY)
                    .hint_text("Prompt sent when the action runs")
                    .desired_width(f32::INFINITY)
                    .desired_rows(4),
            );

            ui.label(RichText::new("Icon").color(TEXT_MUTED));
            ui.horizontal_wrapped(|ui| {
                for spec in ICON_CATALOG {
                    ui.selectable_value(
                        &mut draft.icon,
                        spec.name.to_string(),
                        RichText::new(spec.glyph).size(16.0),
                    )
                    .on_hover_text(spec.label);
                }
            });

            ui.label(RichText::new("Color").color(TEXT_MUTED));
            ui.horizontal(|ui| {
                for color in ActionColor::ALL {
                    render_color_swatch(ui, &mut draft.color, color);
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Cancel").color(TEXT_DIM)).clicked() {
                    intent = Some(SheetIntent::Cancel);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new(model.save_label).color(ACCENT_CYAN).strong())
                        .clicked()
                    {
                        intent = Some(SheetIntent::Save);
                    }
                });
            });
        });

    intent
}

fn render_color_swatch(ui: &mut egui::Ui, selected: &mut ActionColor, color: ActionColor) {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(22.0), egui::Sense::click());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 8.0, action_color(color));
    if *selected == color {
        painter.circle_stroke(rect.center(), 10.0, Stroke::new(2.0, TEXT_PRIMARY));
    }
    if response.on_hover_text(color.as_str()).clicked() {
        *selected = color;
    }
}
