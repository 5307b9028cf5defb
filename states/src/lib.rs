//! Typed state container for the watchstamps dashboard.
//!
//! The UI owns a single [`StateCtx`]. Three kinds of entries live in it:
//!
//! - [`State`]: plain mutable values (config, selection, time). Widgets read
//!   and write them synchronously through `state`/`state_mut`/`update`.
//! - [`Compute`]: caches that are only ever replaced through an [`Updater`],
//!   typically from the callback of an async HTTP request. The frame loop
//!   applies queued replacements with [`StateCtx::sync_computes`].
//! - [`Command`]: explicit side effects (network IO). They never run
//!   implicitly; the app enqueues them and [`StateCtx::flush_commands`]
//!   executes them with read access to states/computes and a cloned updater.
//!
//! Everything is single-threaded except the updater channel, which is the
//! one Send boundary between fetch callbacks and the frame loop.

mod command;
mod compute;
mod ctx;
mod dep;
mod state;
mod time;
mod updater;

pub use command::Command;
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use state::{State, state_assign_impl};
pub use time::Time;
pub use updater::Updater;
