use egui::{Button, Layout, RichText, Ui};
use user_table_business::{PageWindow, UserTablePage};
use user_table_states::StateCtx;

use crate::utils::colors::COLOR_MUTED;

/// Range text on the left, Previous / page / Next on the right.
pub fn render_pagination(state_ctx: &mut StateCtx, ui: &mut Ui, window: &PageWindow) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(window.range_text()).color(COLOR_MUTED));

        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
            // right-to-left: added in reverse visual order
            let next = ui.add_enabled(window.has_next(), Button::new("Next"));
            ui.label(window.page_text());
            let previous = ui.add_enabled(window.has_previous(), Button::new("Previous"));

            if previous.clicked() {
                state_ctx.state_mut::<UserTablePage>().previous_page();
            }
            if next.clicked() {
                state_ctx
                    .state_mut::<UserTablePage>()
                    .next_page(window.total_pages);
            }
        });
    });
}
