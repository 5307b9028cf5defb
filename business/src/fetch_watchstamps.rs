//! Watchstamps fetch: compute-shaped cache + manual fetch command.
//!
//! Fetching is a side effect, so it lives in [`FetchWatchstampsCommand`],
//! which the app shell dispatches when [`WatchstampsCache::should_fetch`]
//! says the poll interval elapsed. The command publishes results through
//! `Updater`; `StateCtx::sync_computes()` applies them next frame.
//!
//! Overlapping polls are resolved last-request-wins: every dispatch stamps a
//! new generation and `assign_box` drops responses older than the cache.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use log::{error, info};

use watchstamps_states::{Command, Compute, Dep, Time, Updater};

use crate::{
    DashboardConfig, Environment, FetchError,
    model::{User, WatchstampsResponse},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    /// No fetch attempted yet (fresh start or invalidated).
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// Last fetch parsed successfully.
    Ready,
    /// Last fetch failed; `users` still holds the previous working set so
    /// stale data stays visible under the error banner.
    Error(String),
}

/// Cache of the latest fetched working set.
#[derive(Debug, Clone, Default)]
pub struct WatchstampsCache {
    users: Vec<User>,
    status: FetchStatus,
    last_fetch: Option<DateTime<Utc>>,
    generation: u64,
}

impl WatchstampsCache {
    /// Cache snapshot at generation zero, for seeding state outside the
    /// fetch command.
    pub fn from_parts(users: Vec<User>, status: FetchStatus) -> Self {
        Self {
            users,
            status,
            last_fetch: None,
            generation: 0,
        }
    }

    /// Raw users as parsed from the wire; deduplication and sorting happen
    /// in the derivation pipeline.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Pending
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the app shell should dispatch a fetch now.
    ///
    /// True on first run; afterwards only when polling is enabled and the
    /// interval elapsed since the last *issued* request. Never true while a
    /// request is in flight.
    pub fn should_fetch(&self, now: DateTime<Utc>, config: &DashboardConfig) -> bool {
        if self.status == FetchStatus::Pending {
            return false;
        }
        match self.last_fetch {
            None => true,
            Some(last) => {
                config.poll
                    && now.signed_duration_since(last)
                        >= Duration::milliseconds(config.poll_interval_ms as i64)
            }
        }
    }

    /// Drop the working set and start over, e.g. after an environment
    /// switch. Bumping the generation also invalidates in-flight responses
    /// for the old environment.
    pub fn invalidate(&mut self) {
        self.users.clear();
        self.status = FetchStatus::Idle;
        self.last_fetch = None;
        self.generation += 1;
    }

    /// Locally remove a user after a successful DELETE.
    pub fn remove_user(&mut self, internal_id: &str) {
        self.users.retain(|u| u.id != internal_id);
    }

    /// Clear an error banner the operator dismissed, keeping stale data.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, FetchStatus::Error(_)) {
            self.status = FetchStatus::Ready;
        }
    }
}

impl Compute for WatchstampsCache {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        match new_self.downcast::<Self>() {
            Ok(new_self) => {
                // Last-request-wins: a slow response from an earlier dispatch
                // (or a pre-invalidation one) must not clobber newer data.
                if new_self.generation < self.generation {
                    info!(
                        "watchstamps: dropping stale response (generation {} < {})",
                        new_self.generation, self.generation
                    );
                    return;
                }
                *self = *new_self;
            }
            Err(_) => error!("watchstamps: type mismatch assigning WatchstampsCache"),
        }
    }
}

/// Manual-only command that GETs `{base}/watchstamps`.
#[derive(Debug, Default)]
pub struct FetchWatchstampsCommand;

impl Command for FetchWatchstampsCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let config = deps.state_ref::<DashboardConfig>();
        let environment = *deps.state_ref::<Environment>();
        let now = deps.state_ref::<Time>().to_utc();

        let (previous_users, generation) = deps
            .compute_ref::<WatchstampsCache>()
            .map(|cache| (cache.users.clone(), cache.generation + 1))
            .unwrap_or_default();

        info!(
            "fetching watchstamps (environment={}, generation={generation})",
            environment.header_value()
        );

        // Mark in-flight immediately, keeping the previous rows visible.
        updater.set(WatchstampsCache {
            users: previous_users.clone(),
            status: FetchStatus::Pending,
            last_fetch: Some(now),
            generation,
        });

        let url = format!("{}/watchstamps", config.api_url());
        let mut request = ehttp::Request::get(&url);
        request.headers = ehttp::Headers::new(&[
            ("Content-Type", "application/json"),
            ("Environment", environment.header_value()),
        ]);

        ehttp::fetch(request, move |result| {
            let outcome = match result {
                Ok(response) if response.ok => {
                    match serde_json::from_slice::<WatchstampsResponse>(&response.bytes) {
                        Ok(parsed) if parsed.is_success => Ok(parsed.result.users),
                        Ok(_) => Err(FetchError::Unsuccessful),
                        Err(e) => Err(FetchError::Parse(e)),
                    }
                }
                Ok(response) => Err(FetchError::Status(response.status)),
                Err(err) => Err(FetchError::Transport(err)),
            };

            match outcome {
                Ok(users) => {
                    info!("fetched {} users (generation {generation})", users.len());
                    updater.set(WatchstampsCache {
                        users,
                        status: FetchStatus::Ready,
                        last_fetch: Some(now),
                        generation,
                    });
                }
                Err(err) => {
                    error!("watchstamps fetch failed: {err}");
                    updater.set(WatchstampsCache {
                        users: previous_users,
                        status: FetchStatus::Error(err.to_string()),
                        last_fetch: Some(now),
                        generation,
                    });
                }
            }
        });
    }
}
