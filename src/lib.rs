//! Quick Actions
//!
//! Named prompt shortcuts with an icon and an accent color, managed from a
//! small settings window or from the command line.
//!
//! ## Layout
//!
//! - [`store`]: the authoritative collection, persistence and change subscriptions
//! - [`sheet`]: toolkit-independent settings sheet (modal state machine + view model)
//! - [`gui`]: eframe front end drawing the sheet
//! - [`config`]: `~/.quick-actions/config.toml`

mod atomic_file;
pub mod config;
pub mod domain;
pub mod gui;
pub mod sheet;
pub mod store;

pub use domain::*;
