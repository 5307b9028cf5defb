//! Deletion confirmation state machine.
//!
//! `Closed → Confirming → (cancel → Closed | confirm → Deleting → Closed)`.
//! The confirm transition is gated on the typed password matching the
//! fixed literal exactly; anything else leaves the button disabled.

use std::any::Any;

use watchstamps_states::{State, state_assign_impl};

use crate::model::User;

/// The password the operator must type to confirm a deletion.
pub const DELETE_PASSWORD: &str = "cbgrows";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteFlow {
    #[default]
    Closed,
    /// Modal open, waiting for the password and confirmation.
    Confirming { user: User, password: String },
    /// DELETE request dispatched for this user.
    Deleting { user: User },
}

impl DeleteFlow {
    /// Open the confirmation modal for `user` with an empty password field.
    pub fn open(&mut self, user: User) {
        *self = DeleteFlow::Confirming {
            user,
            password: String::new(),
        };
    }

    pub fn cancel(&mut self) {
        *self = DeleteFlow::Closed;
    }

    pub fn close(&mut self) {
        *self = DeleteFlow::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteFlow::Closed)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteFlow::Deleting { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            DeleteFlow::Closed => None,
            DeleteFlow::Confirming { user, .. } | DeleteFlow::Deleting { user } => Some(user),
        }
    }

    pub fn password_mut(&mut self) -> Option<&mut String> {
        match self {
            DeleteFlow::Confirming { password, .. } => Some(password),
            _ => None,
        }
    }

    /// Whether the confirm button is enabled: exact match only.
    pub fn can_confirm(&self) -> bool {
        matches!(self, DeleteFlow::Confirming { password, .. } if password == DELETE_PASSWORD)
    }

    /// Move to `Deleting` if authorized. Returns whether the transition
    /// happened; the caller dispatches the DELETE command on true.
    pub fn confirm(&mut self) -> bool {
        if !self.can_confirm() {
            return false;
        }
        if let DeleteFlow::Confirming { user, .. } = std::mem::take(self) {
            *self = DeleteFlow::Deleting { user };
            return true;
        }
        false
    }
}

impl State for DeleteFlow {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
