use std::any::Any;

use watchstamps_states::{State, state_assign_impl};

/// Backend target, sent as the `Environment` request header.
///
/// Switching environments invalidates the watchstamps cache and clears the
/// selection; the next frame re-fetches with the new header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Prod,
    Uat,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Prod, Environment::Uat];

    pub fn header_value(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Uat => "uat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Environment::Prod => "Production",
            Environment::Uat => "UAT",
        }
    }
}

impl State for Environment {
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
