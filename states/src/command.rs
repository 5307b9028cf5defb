use crate::{Dep, Updater};

/// An explicit side effect (network IO).
///
/// Commands never run implicitly. The app enqueues them by type and
/// [`StateCtx::flush_commands`](crate::StateCtx::flush_commands) executes
/// them with read-only access to the registered states/computes and a cloned
/// [`Updater`] for publishing results asynchronously.
pub trait Command: std::any::Any + Send {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
