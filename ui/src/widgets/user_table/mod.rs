//! The user table widget.
//!
//! - `panel`: presentation switch (loading, error, ready) and the search toolbar
//! - `table`: the `egui_extras` table of the current page
//! - `pagination`: range text and Previous/Next
//!
//! Widgets only read via `cached`/`state` and write through `state_mut`, so every change goes
//! through the compute pipeline on the app's next `run_computed`.

mod pagination;
mod panel;
mod table;

pub use panel::{UserTableEvent, user_table};
