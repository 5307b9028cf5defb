use watchstamps_business::{
    DashboardConfig, DeleteFlow, DeleteUserCompute, FetchWatchstampsCommand, Selection,
    WatchstampsCache, derive_view,
};
use watchstamps_states::{StateCtx, Time};

use crate::{state::State, widgets};

/// How often the frame loop wakes up without user input, so the poll
/// interval check keeps running on an idle window.
const IDLE_REPAINT_MS: u64 = 250;

pub struct WatchstampsApp {
    state: State,
}

impl WatchstampsApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for WatchstampsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.auto_time {
            self.state.ctx.update::<Time>(|t| t.set_now());
        }

        // Sync Compute for render
        self.state.ctx.sync_computes();

        apply_delete_result(&mut self.state.ctx);
        maybe_fetch(&mut self.state.ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::environment_picker(&mut self.state.ctx, ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(&self.state.ctx, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Watchstamps");
            ui.separator();
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(IDLE_REPAINT_MS));
    }
}

/// Dispatch a fetch when the cache says one is due. Runs every frame; the
/// interval/in-flight checks live in [`WatchstampsCache::should_fetch`].
pub fn maybe_fetch(state_ctx: &mut StateCtx) {
    let now = state_ctx.state::<Time>().to_utc();
    let due = state_ctx
        .cached::<WatchstampsCache>()
        .map(|cache| cache.should_fetch(now, state_ctx.state::<DashboardConfig>()))
        .unwrap_or(false);

    if due {
        state_ctx.dispatch::<FetchWatchstampsCommand>();
    }
}

/// Apply a finished DELETE to local state: drop the row, reassign the
/// selection, close the modal.
///
/// The selection moves to the first user of the re-derived view, or to
/// nothing when the last user was deleted; an empty table is a valid state.
pub fn apply_delete_result(state_ctx: &mut StateCtx) {
    let Some(deleted_id) = state_ctx
        .cached::<DeleteUserCompute>()
        .and_then(|compute| compute.deleted_id().map(str::to_string))
    else {
        return;
    };

    let cache = state_ctx.compute_mut::<WatchstampsCache>();
    cache.remove_user(&deleted_id);
    let next_selected = derive_view(cache.users(), None).selected_user_id;

    state_ctx.state_mut::<Selection>().set(next_selected);
    state_ctx.state_mut::<DeleteFlow>().close();
    state_ctx.compute_mut::<DeleteUserCompute>().reset();
}
