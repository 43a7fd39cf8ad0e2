//! Fallback fonts so icon glyphs (⚡ ▶ 🗑 ✏ …) render on every platform

use std::path::Path;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::debug;

#[cfg(target_os = "macos")]
const SYMBOL_FONTS: &[(&str, &str)] = &[
    ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
    ("emoji", "/System/Library/Fonts/Apple Color Emoji.ttc"),
    (
        "arial_unicode",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    ),
];

#[cfg(target_os = "windows")]
const SYMBOL_FONTS: &[(&str, &str)] = &[
    ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
    ("emoji", "C:\\Windows\\Fonts\\seguiemj.ttf"),
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYMBOL_FONTS: &[(&str, &str)] = &[
    (
        "symbols",
        "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
    ),
    ("emoji", "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf"),
    ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
];

/// Append every readable font in `candidates` as a fallback of both families.
/// Returns the names that were installed.
pub(super) fn install_fallbacks(
    fonts: &mut FontDefinitions,
    candidates: &[(&str, &str)],
) -> Vec<String> {
    let mut installed = Vec::new();

    for (name, path) in candidates {
        let Ok(bytes) = std::fs::read(Path::new(path)) else {
            continue;
        };

        fonts
            .font_data
            .insert((*name).to_owned(), FontData::from_owned(bytes).into());
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push((*name).to_owned());
            }
        }

        debug!("Loaded fallback font '{}' from: {}", name, path);
        installed.push((*name).to_owned());
    }

    installed
}

pub(super) fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let installed = install_fallbacks(&mut fonts, SYMBOL_FONTS);
    if installed.is_empty() {
        debug!("No symbol fallback fonts found; some icons may render as boxes");
    }
    ctx.set_fonts(fonts);
}
