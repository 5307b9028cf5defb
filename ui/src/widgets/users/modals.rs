//! Password-gated deletion modal.

use egui::{Button, Color32, RichText, TextEdit, Ui, Window};
use watchstamps_business::{
    DeleteFlow, DeleteUserCommand, DeleteUserCompute, render_time_spent,
};
use watchstamps_states::StateCtx;

/// Shows the confirmation modal while the [`DeleteFlow`] is open.
///
/// OK stays disabled until the typed password matches exactly; a confirmed
/// deletion dispatches [`DeleteUserCommand`] and switches the modal to a
/// progress spinner until the response lands.
pub fn show_delete_user_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let action_error = state_ctx
        .cached::<DeleteUserCompute>()
        .and_then(|compute| compute.error_message().map(str::to_string));

    let flow = state_ctx.state_mut::<DeleteFlow>();
    let Some(user) = flow.user().cloned() else {
        return;
    };
    let deleting = flow.is_deleting();

    let mut window_open = true;
    let mut confirm_clicked = false;
    let mut cancel_clicked = false;

    Window::new(format!("Delete user '{}'", user.user_id))
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &action_error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
                if deleting {
                    // The DELETE failed; the row is untouched.
                    if ui.button("Close").clicked() {
                        cancel_clicked = true;
                    }
                    return;
                }
            }

            if deleting {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Deleting user...");
                });
                return;
            }

            ui.label(format!(
                "This will permanently delete '{}' and all of their sessions.",
                user.user_id
            ));
            ui.label(format!(
                "The user has spent {} on the platform.",
                render_time_spent(user.total_time_spent)
            ));
            ui.add_space(8.0);

            if let Some(password) = flow.password_mut() {
                ui.horizontal(|ui| {
                    ui.label("Password:");
                    ui.add(TextEdit::singleline(password).password(true));
                });
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let confirm_button = Button::new(RichText::new("OK").color(Color32::RED));
                if ui.add_enabled(flow.can_confirm(), confirm_button).clicked() {
                    confirm_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    let mut dispatch_delete = false;
    if cancel_clicked || (!window_open && !deleting) {
        flow.cancel();
        state_ctx.compute_mut::<DeleteUserCompute>().reset();
    } else if confirm_clicked && flow.confirm() {
        dispatch_delete = true;
    }

    if dispatch_delete {
        state_ctx.dispatch::<DeleteUserCommand>();
    }
}
