//! Users panel: toolbar, error banner, the users table and the sessions
//! table for the selected user.

use egui::{ScrollArea, Ui};
use egui_extras::TableBuilder;
use watchstamps_business::{
    DeleteFlow, DeleteUserCompute, FetchWatchstampsCommand, Selection, User, WatchstampsCache,
    derive_view,
};
use watchstamps_states::StateCtx;

use super::modals::show_delete_user_modal;
use super::table::columns::{
    HEADER_HEIGHT, ROW_HEIGHT, sessions_columns, users_columns,
};
use super::table::header::{render_sessions_header, render_users_header};
use super::table::row::{render_session_row, render_user_row};
use crate::widgets::error_banner;

pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(cache) = state_ctx.cached::<WatchstampsCache>() else {
        return;
    };
    let is_loading = cache.is_loading();
    let error_message = cache.error_message().map(str::to_string);
    let selection = state_ctx.state::<Selection>().clone();

    let view = derive_view(cache.users(), selection.user_id());

    // Collected while rendering, applied afterwards so the table iteration
    // never holds a mutable borrow of the state context.
    let mut refresh_clicked = false;
    let mut dismiss_clicked = false;
    let mut user_to_select: Option<String> = None;
    let mut user_to_delete: Option<User> = None;

    ui.horizontal(|ui| {
        if ui.button("🔄 Refresh").clicked() && !is_loading {
            refresh_clicked = true;
        }
        if is_loading {
            ui.spinner();
            ui.label("Loading...");
        }
    });

    if let Some(error) = &error_message {
        if error_banner(ui, error) {
            dismiss_clicked = true;
        }
    }

    ui.add_space(8.0);
    ui.strong(format!("User count : {}", view.user_count));

    ScrollArea::vertical()
        .id_salt("users_scroll")
        .max_height(ui.available_height() * 0.5)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui).id_salt("users_table").striped(true);
            for column in users_columns() {
                builder = builder.column(column);
            }
            builder
                .header(HEADER_HEIGHT, |mut header| {
                    render_users_header(&mut header);
                })
                .body(|mut body| {
                    for user in &view.users {
                        body.row(ROW_HEIGHT, |mut row| {
                            let is_selected =
                                view.selected_user_id.as_deref() == Some(user.user_id.as_str());
                            let event = render_user_row(&mut row, user, is_selected);
                            if event.select {
                                user_to_select = Some(user.user_id.clone());
                            }
                            if event.delete {
                                user_to_delete = Some(user.clone());
                            }
                        });
                    }
                });
        });

    if view.users.is_empty() && !is_loading {
        ui.label("No users.");
    }

    ui.add_space(12.0);
    ui.strong(format!("Session count : {}", view.sessions.len()));

    ScrollArea::vertical()
        .id_salt("sessions_scroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("sessions_table")
                .striped(true);
            for column in sessions_columns() {
                builder = builder.column(column);
            }
            builder
                .header(HEADER_HEIGHT, |mut header| {
                    render_sessions_header(&mut header);
                })
                .body(|mut body| {
                    for session in &view.sessions {
                        body.row(ROW_HEIGHT, |mut row| {
                            render_session_row(&mut row, session);
                        });
                    }
                });
        });

    // Persist the defaulted selection so it survives later data changes
    // instead of jumping whenever the sort order moves another user first.
    if selection.user_id().is_none() && view.selected_user_id.is_some() {
        state_ctx.state_mut::<Selection>().set(view.selected_user_id);
    }

    if let Some(user_id) = user_to_select {
        state_ctx.state_mut::<Selection>().select(user_id);
    }
    if let Some(user) = user_to_delete {
        state_ctx.compute_mut::<DeleteUserCompute>().reset();
        state_ctx.state_mut::<DeleteFlow>().open(user);
    }
    if dismiss_clicked {
        state_ctx.compute_mut::<WatchstampsCache>().dismiss_error();
    }
    if refresh_clicked {
        state_ctx.dispatch::<FetchWatchstampsCommand>();
    }

    show_delete_user_modal(state_ctx, ui);
}
