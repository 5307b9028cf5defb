use std::any::Any;

/// A cache whose value is replaced through the [`Updater`](crate::Updater)
/// channel rather than mutated in place.
///
/// Network callbacks run on another thread (or later on the same one), so
/// they cannot touch the context directly. They `Updater::set` a whole new
/// cache value; [`StateCtx::sync_computes`](crate::StateCtx::sync_computes)
/// applies it via `assign_box` at the start of the next frame.
///
/// `assign_box` is the merge point: the default [`assign_impl`] overwrites
/// wholesale, but a compute may implement its own policy (e.g. dropping
/// stale-generation responses).
pub trait Compute: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body: downcast and overwrite, log on type mismatch.
pub fn assign_impl<T: Compute + Sized>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "assign_impl: type mismatch assigning {}",
            std::any::type_name::<T>()
        ),
    }
}
