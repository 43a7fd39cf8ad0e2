//! Quick actions sheet, independent of any GUI toolkit
//!
//! - [`ModalState`]: the one modal (editor or confirmation) in front of the list
//! - [`SheetController`]: applies [`SheetIntent`]s and calls the manager
//! - [`render`]: pure view model for the current state

mod controller;
mod editor;
mod state;
mod view;

pub use controller::{SheetController, SheetIntent, SheetOutcome};
pub use editor::EditorDraft;
pub use state::ModalState;
pub use view::{
    render, render_row, ConfirmDialog, ConfirmKind, EditorModel, Overlay, RenderOptions,
    RowModel, SheetContent, SheetModel, EMPTY_HINT, EMPTY_TITLE, RESET_MESSAGE, SHEET_TITLE,
};

#[cfg(test)]
mod tests;
