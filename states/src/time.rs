use std::any::Any;

use chrono::{DateTime, Utc};

use crate::{State, state_assign_impl};

/// Mockable clock state.
///
/// The app shell advances it from the wall clock each frame; tests set it
/// directly to exercise interval behavior without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Time(DateTime<Utc>);

impl Default for Time {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl Time {
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.0 = now;
    }

    pub fn set_now(&mut self) {
        self.0 = Utc::now();
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.0
    }
}

impl State for Time {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_is_settable() {
        let mut time = Time::default();
        let later = time.to_utc() + Duration::minutes(5);
        time.set(later);
        assert_eq!(time.to_utc(), later);
    }
}
