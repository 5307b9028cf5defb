use watchstamps_business::{
    DashboardConfig, DeleteFlow, DeleteUserCommand, DeleteUserCompute, Environment,
    FetchWatchstampsCommand, Selection, WatchstampsCache,
};
use watchstamps_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Advance [`Time`] to the wall clock every frame. Tests turn this off
    /// and drive time manually.
    pub auto_time: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(DashboardConfig::default(), true)
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self::with_config(DashboardConfig::new(base_url), false)
    }

    fn with_config(config: DashboardConfig, auto_time: bool) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(Environment::default());
        ctx.add_state(Selection::default());
        ctx.add_state(DeleteFlow::default());

        ctx.record_compute(WatchstampsCache::default());
        ctx.record_compute(DeleteUserCompute::default());

        ctx.record_command(FetchWatchstampsCommand);
        ctx.record_command(DeleteUserCommand);

        Self { ctx, auto_time }
    }
}
