//! User deletion: compute-shaped result cache + manual DELETE command.

use std::any::Any;

use log::{error, info, warn};

use watchstamps_states::{Command, Compute, Dep, Updater, assign_impl};

use crate::{DashboardConfig, DeleteFlow, Environment, FetchError};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteResult {
    #[default]
    Idle,
    Pending,
    /// DELETE succeeded; holds the backend-internal id of the removed user.
    Deleted(String),
    Error(String),
}

/// Cache the UI polls to apply the local removal once the DELETE lands.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserCompute {
    pub result: DeleteResult,
}

impl DeleteUserCompute {
    pub fn is_pending(&self) -> bool {
        self.result == DeleteResult::Pending
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            DeleteResult::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The removed user's internal id, if the last DELETE succeeded.
    pub fn deleted_id(&self) -> Option<&str> {
        match &self.result {
            DeleteResult::Deleted(id) => Some(id),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.result = DeleteResult::Idle;
    }
}

impl Compute for DeleteUserCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Manual-only command that DELETEs `{base}/watchstamp/{id}`.
///
/// Only runs when the [`DeleteFlow`] has reached `Deleting`; the password
/// gate already happened in the confirm transition.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let flow = deps.state_ref::<DeleteFlow>();
        let Some(user) = flow.user().filter(|_| flow.is_deleting()) else {
            warn!("DeleteUserCommand dispatched outside the Deleting state");
            return;
        };

        let config = deps.state_ref::<DashboardConfig>();
        let environment = *deps.state_ref::<Environment>();
        let internal_id = user.id.clone();

        info!(
            "deleting user {} (id={internal_id}, environment={})",
            user.user_id,
            environment.header_value()
        );

        updater.set(DeleteUserCompute {
            result: DeleteResult::Pending,
        });

        let request = ehttp::Request {
            method: "DELETE".to_string(),
            url: format!("{}/watchstamp/{internal_id}", config.api_url()),
            body: Vec::new(),
            headers: ehttp::Headers::new(&[
                ("Content-Type", "application/json"),
                ("Environment", environment.header_value()),
            ]),
        };

        ehttp::fetch(request, move |result| {
            let outcome = match result {
                // Success is the HTTP-ok status; the body is ignored.
                Ok(response) if response.ok => Ok(()),
                Ok(response) => Err(FetchError::Status(response.status)),
                Err(err) => Err(FetchError::Transport(err)),
            };

            match outcome {
                Ok(()) => {
                    info!("deleted user id={internal_id}");
                    updater.set(DeleteUserCompute {
                        result: DeleteResult::Deleted(internal_id),
                    });
                }
                Err(err) => {
                    error!("delete failed for id={internal_id}: {err}");
                    updater.set(DeleteUserCompute {
                        result: DeleteResult::Error(err.to_string()),
                    });
                }
            }
        });
    }
}
