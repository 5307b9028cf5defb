use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
};

use flume::{Receiver, Sender};

use crate::{Command, Compute, Dep, State, Updater};

/// The application's explicit state container.
///
/// Owned by the UI shell; everything else (widgets, commands, tests) goes
/// through it. See the crate docs for the State / Compute / Command split.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queued: Vec<TypeId>,

    send: Sender<(TypeId, Box<dyn Any + Send>)>,
    recv: Receiver<(TypeId, Box<dyn Any + Send>)>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queued: Vec::new(),
            send,
            recv,
        }
    }

    // Registration — done once during app setup.

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    // State access.

    /// # Panics
    /// Panics if `T` was never registered; that is a wiring bug.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", std::any::type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered; that is a wiring bug.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("state not registered: {}", std::any::type_name::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    // Compute access.

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<T>())
    }

    /// Direct mutation of a compute cache from the frame loop, bypassing the
    /// updater channel. Used for synchronous local edits such as removing a
    /// deleted row or invalidating on environment switch.
    ///
    /// # Panics
    /// Panics if `T` was never recorded; that is a wiring bug.
    pub fn compute_mut<T: Compute>(&mut self) -> &mut T {
        self.computes
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| {
                let any: &mut dyn Any = c.as_mut();
                any.downcast_mut::<T>()
            })
            .unwrap_or_else(|| panic!("compute not recorded: {}", std::any::type_name::<T>()))
    }

    // Channel plumbing.

    /// A clonable handle async callbacks use to publish compute updates.
    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Drain queued compute updates and apply them. Call once per frame,
    /// before rendering.
    pub fn sync_computes(&mut self) {
        while let Ok((type_id, boxed)) = self.recv.try_recv() {
            match self.computes.get_mut(&type_id) {
                Some(compute) => compute.assign_box(boxed),
                None => log::warn!("sync_computes: update for unrecorded compute {type_id:?}"),
            }
        }
    }

    // Command dispatch.

    pub fn enqueue_command<T: Command>(&mut self) {
        self.queued.push(TypeId::of::<T>());
    }

    /// Run every queued command with read access to states/computes.
    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        for type_id in queued {
            match self.commands.get(&type_id) {
                Some(command) => {
                    let deps = Dep::new(&self.states, &self.computes);
                    command.run(deps, Updater::new(self.send.clone()));
                }
                None => log::warn!("flush_commands: command not recorded: {type_id:?}"),
            }
        }
    }

    /// Enqueue and flush in one step.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }
}
