use std::any::{Any, TypeId};

use flume::Sender;

use crate::Compute;

/// Send half of the compute-update channel.
///
/// Cloned into async fetch callbacks; the frame loop drains the other end in
/// [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    /// Queue a replacement value for the compute cache `T`.
    ///
    /// The value is applied on the next `sync_computes` through the cache's
    /// `assign_box`, which may reject it (stale generation).
    pub fn set<T: Compute>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            // Receiver gone: the context was torn down while a request was
            // still in flight. Dropping the result is the correct behavior.
            log::debug!(
                "updater: dropped late update for {}",
                std::any::type_name::<T>()
            );
        }
    }
}
