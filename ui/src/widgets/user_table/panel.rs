use std::time::Duration;

use egui::{Button, RichText, TextEdit, Ui};
use user_table_business::{
    PageWindowCompute, TablePresentation, UserSearchInput, UserSelection, current_presentation,
};
use user_table_states::StateCtx;

use super::{pagination::render_pagination, table::render_users_table};
use crate::utils::colors::{COLOR_MUTED, COLOR_RED};

/// How often a loading table polls for the fetch result.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

/// Events the widget cannot handle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTableEvent {
    /// The user asked to reload after a failed fetch.
    Retry,
}

/// Renders the table for whatever state `ctx` is in.
pub fn user_table(state_ctx: &mut StateCtx, ui: &mut Ui) -> Option<UserTableEvent> {
    match current_presentation(state_ctx) {
        TablePresentation::Loading => {
            render_loading(ui);
            None
        }
        TablePresentation::Error { message } => render_error(ui, &message),
        TablePresentation::Ready { has_results } => {
            render_ready(state_ctx, ui, has_results);
            None
        }
    }
}

fn render_loading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.spinner();
        ui.label("Loading users...");
    });
    // results arrive off-frame; keep pumping until they do
    ui.ctx().request_repaint_after(LOADING_REPAINT);
}

fn render_error(ui: &mut Ui, message: &str) -> Option<UserTableEvent> {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(RichText::new("Failed to load users").strong());
        ui.colored_label(COLOR_RED, format!("Error: {message}"));
        ui.add_space(8.0);
        ui.add(Button::new("Retry"))
            .clicked()
            .then_some(UserTableEvent::Retry)
    })
    .inner
}

fn render_ready(state_ctx: &mut StateCtx, ui: &mut Ui, has_results: bool) {
    render_toolbar(state_ctx, ui);
    ui.add_space(8.0);

    if has_results {
        render_users_table(state_ctx, ui);
    } else {
        let term = &state_ctx.state::<UserSearchInput>().term;
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            let message = format!("No users found matching \"{term}\"");
            ui.label(RichText::new(message).color(COLOR_MUTED));
        });
    }

    ui.add_space(8.0);
    if let Some(window) = state_ctx.cached::<PageWindowCompute>().map(|page| page.window) {
        render_pagination(state_ctx, ui, &window);
    }
}

fn render_toolbar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ui.horizontal(|ui| {
        // edit a copy; only a real change may dirty the filter
        let mut term = state_ctx.state::<UserSearchInput>().term.clone();
        let response = ui.add(
            TextEdit::singleline(&mut term)
                .hint_text("Search by name, email or username")
                .desired_width(280.0),
        );
        if response.changed() {
            state_ctx.state_mut::<UserSearchInput>().term = term;
        }

        let selection = state_ctx.state::<UserSelection>();
        ui.label(RichText::new(selection.label()).color(COLOR_MUTED));
        if !selection.is_empty() && ui.button("Clear selection").clicked() {
            state_ctx.state_mut::<UserSelection>().clear();
        }
    });
}
