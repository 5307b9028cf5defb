use egui::Ui;
use watchstamps_business::{DeleteFlow, DeleteUserCompute, Environment, Selection, WatchstampsCache};
use watchstamps_states::StateCtx;

/// Radio picker for the backend environment.
///
/// Switching invalidates the watchstamps cache (bumping its generation so
/// in-flight responses for the old environment are dropped), clears the
/// selection and any half-finished deletion. The next frame re-fetches with
/// the new `Environment` header.
pub fn environment_picker(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let current = *state_ctx.state::<Environment>();
    let mut chosen = current;

    ui.horizontal(|ui| {
        for environment in Environment::ALL {
            ui.radio_value(&mut chosen, environment, environment.label());
        }
    });

    if chosen != current {
        log::info!(
            "switching environment {} -> {}",
            current.header_value(),
            chosen.header_value()
        );
        *state_ctx.state_mut::<Environment>() = chosen;
        state_ctx.compute_mut::<WatchstampsCache>().invalidate();
        state_ctx.compute_mut::<DeleteUserCompute>().reset();
        state_ctx.state_mut::<Selection>().clear();
        state_ctx.state_mut::<DeleteFlow>().close();
    }
}
