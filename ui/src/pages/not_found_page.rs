use egui::{RichText, Ui};
use user_table_business::USERS_PATH;

use crate::utils::colors::COLOR_MUTED;

/// Page for any path the shell does not mount. Returns true when the link back was clicked.
pub fn not_found_page(ui: &mut Ui, path: &str) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("Page not found");
        ui.label(RichText::new(format!("Nothing lives at {path}")).color(COLOR_MUTED));
        ui.add_space(12.0);
        ui.link(format!("Go to {USERS_PATH}")).clicked()
    })
    .inner
}
