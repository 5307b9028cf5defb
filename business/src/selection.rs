use std::any::Any;

use watchstamps_states::{State, state_assign_impl};

/// The highlighted `userId`, driving which sessions are shown.
///
/// Defaults to the first user once data loads; reassigned (possibly to
/// `None`) after a deletion and cleared on environment switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    user_id: Option<String>,
}

impl Selection {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn select(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }

    pub fn set(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    pub fn clear(&mut self) {
        self.user_id = None;
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
    }
}

impl State for Selection {
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
