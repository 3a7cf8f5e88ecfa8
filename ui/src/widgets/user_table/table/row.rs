use egui::{Stroke, Ui};
use egui_extras::TableRow;
use user_table_business::User;

use super::cells::{render_checkbox_cell, render_muted_cell, render_text_cell};

/// Renders one user. Returns true when the row checkbox was toggled.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User, selected: bool) -> bool {
    row.set_selected(selected);

    let mut toggled = false;
    row.col(|ui| {
        toggled = render_checkbox_cell(ui, selected, user.id);
        draw_cell_bottom_border(ui);
    });

    let name = user.full_name();
    for text in [name.as_str(), user.email.as_str(), user.username()] {
        row.col(|ui| {
            render_text_cell(ui, text);
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        render_muted_cell(ui, &user.phone);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_muted_cell(ui, &user.company.name);
        draw_cell_bottom_border(ui);
    });

    toggled
}

fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
