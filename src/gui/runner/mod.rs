//! GUI runner - opens the quick actions window

mod fonts;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::QuickActionsApp;
use crate::config::Config;
use crate::store::QuickActionStore;

use fonts::configure_fonts;

/// Run the quick actions window until it is closed
pub fn run_gui(config: &Config, store: QuickActionStore) -> Result<()> {
    info!(
        "Opening quick actions ({} actions, store: {})",
        store.len(),
        store.location()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quick Actions")
            .with_inner_size([config.gui.width, config.gui.height])
            .with_min_inner_size([360.0, 280.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = QuickActionsApp::new(store, config.render_options());

    eframe::run_native(
        "quick-actions",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
