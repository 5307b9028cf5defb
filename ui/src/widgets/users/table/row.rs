//! Row rendering for the users and sessions tables.

use egui_extras::TableRow;
use watchstamps_business::{Session, User, render_date, render_time_spent};

/// Clicks collected while rendering a user row; applied after the table
/// iteration to keep the borrow on the state context short.
#[derive(Default)]
pub struct UserRowEvent {
    pub select: bool,
    pub delete: bool,
}

#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &User,
    is_selected: bool,
) -> UserRowEvent {
    let mut event = UserRowEvent::default();

    row.col(|ui| {
        if ui.selectable_label(is_selected, &user.user_id).clicked() {
            event.select = true;
        }
    });
    row.col(|ui| {
        ui.label(user.sessions_count.to_string());
    });
    row.col(|ui| {
        ui.label(render_date(&user.created_at));
    });
    row.col(|ui| {
        ui.label(render_date(&user.last_seen_at));
    });
    row.col(|ui| {
        ui.label(render_time_spent(user.total_time_spent));
    });
    row.col(|ui| {
        if ui.button("🗑").on_hover_text("Delete user").clicked() {
            event.delete = true;
        }
    });

    event
}

#[inline]
pub fn render_session_row(row: &mut TableRow<'_, '_>, session: &Session) {
    row.col(|ui| {
        ui.label(&session.session_id);
    });
    row.col(|ui| {
        ui.label(&session.user_id);
    });
    row.col(|ui| {
        ui.label(session.time_stamps_count.to_string());
    });
    row.col(|ui| {
        ui.label(render_date(&session.session_started_at));
    });
    row.col(|ui| {
        ui.label(render_date(&session.session_ended_at));
    });
    row.col(|ui| {
        ui.label(render_time_spent(session.session_duration));
    });
}
