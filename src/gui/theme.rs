//! GUI Theme: dark sheet palette
//!
//! Color constants and style setup for the quick actions window.

use eframe::egui::{self, Color32, Stroke};

use crate::domain::ActionColor;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Header/footer bars and rows
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Hovered widgets
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(32, 40, 52);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 235);
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 160, 170);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 120);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 200, 255);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(255, 80, 80);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(255, 200, 50);

/// Display color of a quick action accent
pub fn action_color(color: ActionColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Apply the dark theme to the egui context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_PRIMARY;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_CYAN);
    ctx.set_style(style);
}
