//! Domain logic for the watchstamps dashboard.
//!
//! Everything here is renderer-free: the view-model derivation in [`view`]
//! is a pure function over fetched data and the current selection, and the
//! network side effects live in explicit commands
//! ([`FetchWatchstampsCommand`], [`DeleteUserCommand`]) that publish their
//! results through the states runtime.

mod config;
mod delete_flow;
mod delete_user;
mod environment;
mod error;
mod fetch_watchstamps;
mod model;
mod selection;
pub mod view;

pub use config::DashboardConfig;
pub use delete_flow::{DELETE_PASSWORD, DeleteFlow};
pub use delete_user::{DeleteResult, DeleteUserCommand, DeleteUserCompute};
pub use environment::Environment;
pub use error::FetchError;
pub use fetch_watchstamps::{FetchStatus, FetchWatchstampsCommand, WatchstampsCache};
pub use model::{Session, User, WatchstampsResponse, WatchstampsResult};
pub use selection::Selection;
pub use view::{DerivedView, derive_view, render_date, render_time_spent};
