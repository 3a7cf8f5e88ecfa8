//! Cell renderers for the user table.

use egui::{RichText, Ui};

use crate::utils::colors::COLOR_MUTED;

/// Row checkbox. Returns true when clicked.
#[inline]
pub fn render_checkbox_cell(ui: &mut Ui, selected: bool, id: u64) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "")
        .on_hover_text(format!("Select user {id}"))
        .changed()
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Secondary columns; empty values show a dash.
#[inline]
pub fn render_muted_cell(ui: &mut Ui, text: &str) {
    let text = if text.is_empty() { "-" } else { text };
    ui.label(RichText::new(text).color(COLOR_MUTED));
}
