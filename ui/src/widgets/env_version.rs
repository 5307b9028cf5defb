use egui::{Color32, Response, Ui};
use watchstamps_business::Environment;
use watchstamps_states::StateCtx;

/// Displays the current backend environment and the app version, e.g.
/// `prod:0.1.0`. UAT gets a warning color so nobody deletes prod users by
/// accident while pointed at the wrong backend.
pub fn env_version(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let environment = state_ctx.state::<Environment>();

    let color = match environment {
        Environment::Prod => Color32::GREEN,
        Environment::Uat => Color32::from_rgb(255, 165, 0),
    };

    let display_text = format!(
        "{}:{}",
        environment.header_value(),
        env!("CARGO_PKG_VERSION")
    );
    ui.colored_label(color, display_text)
}
