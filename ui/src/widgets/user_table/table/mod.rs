//! Table of the visible page:
//! - `columns`: column definitions and widths
//! - `header`: header row with the select-all checkbox
//! - `row`: one user row
//! - `cells`: per-column cell renderers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Layout, Ui};
use egui_extras::TableBuilder;
use user_table_business::{PageWindowCompute, Selection, UserSelection};
use user_table_states::StateCtx;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the current page and applies checkbox changes to `UserSelection` afterwards.
pub fn render_users_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(page) = state_ctx.cached::<PageWindowCompute>() else {
        return;
    };
    let page_ids = page.ids();
    let selection = state_ctx.state::<UserSelection>();

    let mut all_checked = selection.is_all_selected_on_page(&page_ids);
    let mut edits = SelectionEdits::default();

    let mut builder = TableBuilder::new(ui)
        .id_salt("user_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(egui::Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if render_table_header(&mut header, &mut all_checked) {
                edits.select_all = Some(all_checked);
            }
        })
        .body(|mut body| {
            for user in &page.users {
                let selected = selection.contains(user.id);
                body.row(ROW_HEIGHT, |mut row| {
                    if render_user_row(&mut row, user, selected) {
                        edits.toggled.push(user.id);
                    }
                });
            }
        });

    if !edits.is_empty() {
        edits.apply(&mut state_ctx.state_mut::<UserSelection>().0, &page_ids);
    }
}

/// Checkbox changes collected while the table renders, applied once it is done.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelectionEdits {
    /// Requested header state; covers exactly the ids of the visible page.
    pub select_all: Option<bool>,
    /// Row checkboxes clicked this frame, in click order.
    pub toggled: Vec<u64>,
}

impl SelectionEdits {
    pub fn is_empty(&self) -> bool {
        self.select_all.is_none() && self.toggled.is_empty()
    }

    /// Header first, then row toggles.
    pub fn apply(self, selection: &mut Selection, page_ids: &[u64]) {
        if let Some(checked) = self.select_all {
            selection.select_all_on_page(page_ids, checked);
        }
        for id in self.toggled {
            selection.toggle(id);
        }
    }
}
