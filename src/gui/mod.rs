//! GUI for managing quick actions
//!
//! An eframe window that draws the toolkit-independent sheet model from
//! [`crate::sheet`]: a list of rows, an editor window and confirmation
//! dialogs for delete and reset.

pub mod app;
pub mod confirm;
pub mod editor;
pub mod runner;
pub mod sheet;
pub mod theme;

pub use app::QuickActionsApp;
pub use runner::run_gui;
