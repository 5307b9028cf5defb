//! Header rendering for the users and sessions tables.

use egui::Ui;
use egui_extras::TableRow;

const USERS_HEADERS: [&str; 6] = [
    "User ID",
    "Sessions",
    "First seen",
    "Last seen",
    "Total time spent",
    "",
];

const SESSIONS_HEADERS: [&str; 6] = [
    "Session ID",
    "User ID",
    "Timestamps",
    "Started",
    "Ended",
    "Duration",
];

#[inline]
pub fn render_users_header(header: &mut TableRow<'_, '_>) {
    for label in USERS_HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
pub fn render_sessions_header(header: &mut TableRow<'_, '_>) {
    for label in SESSIONS_HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
