//! Column definitions for the user table.

use egui_extras::Column;

pub const CHECKBOX_WIDTH: f32 = 32.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 26.0;

/// In order: checkbox, Name, Email, Username, Phone, Company.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(CHECKBOX_WIDTH),
        Column::initial(160.0).at_least(100.0),
        Column::initial(220.0).at_least(120.0),
        Column::initial(120.0).at_least(80.0),
        Column::initial(140.0).at_least(80.0),
        Column::remainder().at_least(100.0),
    ]
}
