//! Core domain types for quick actions

mod color;
mod defaults;
mod icon;
mod quick_action;

pub use color::{ActionColor, UnknownColor};
pub use defaults::{
    default_actions, COMMIT_AND_PUSH_ID, COMMIT_AND_PUSH_NAME, RUN_APP_ID, RUN_APP_NAME,
};
pub use icon::{find_icon, glyph_for, IconSpec, DEFAULT_ICON, FALLBACK_GLYPH, ICON_CATALOG};
pub use quick_action::{NewQuickAction, QuickAction, QuickActionId};
