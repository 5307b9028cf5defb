//! Column definitions for the users and sessions tables.

use egui_extras::Column;

pub const TIMESTAMP_WIDTH: f32 = 150.0;
pub const COUNT_WIDTH: f32 = 70.0;
pub const DURATION_WIDTH: f32 = 110.0;
pub const DELETE_WIDTH: f32 = 40.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Users table: User ID / Sessions / First seen / Last seen / Total time
/// spent / Delete.
#[inline]
pub fn users_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0),
        Column::exact(COUNT_WIDTH),
        Column::exact(TIMESTAMP_WIDTH),
        Column::exact(TIMESTAMP_WIDTH),
        Column::exact(DURATION_WIDTH),
        Column::exact(DELETE_WIDTH),
    ]
}

/// Sessions table: Session ID / User ID / Timestamps / Started / Ended /
/// Duration.
#[inline]
pub fn sessions_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0),
        Column::auto().at_least(100.0),
        Column::exact(COUNT_WIDTH),
        Column::exact(TIMESTAMP_WIDTH),
        Column::exact(TIMESTAMP_WIDTH),
        Column::exact(DURATION_WIDTH),
    ]
}
