use egui::Ui;
use egui_extras::TableRow;

/// Labels after the select-all column.
const HEADERS: [&str; 5] = ["Name", "Email", "Username", "Phone", "Company"];

/// Renders the header. Returns true when the select-all checkbox was clicked;
/// `all_checked` then holds the requested state.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, all_checked: &mut bool) -> bool {
    let mut changed = false;
    header.col(|ui| {
        changed = ui
            .checkbox(all_checked, "")
            .on_hover_text("Select all on this page")
            .changed();
    });

    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
    changed
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
