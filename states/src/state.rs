use std::any::Any;

/// A plain mutable value owned by the [`StateCtx`](crate::StateCtx).
///
/// States are read and written synchronously from the frame loop. They are
/// never replaced through the updater channel; that path is reserved for
/// [`Compute`](crate::Compute) caches.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` wholesale with a boxed new value of the same type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body: downcast and overwrite, log on type mismatch.
pub fn state_assign_impl<T: State + Sized>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => log::error!(
            "state_assign_impl: type mismatch assigning {}",
            std::any::type_name::<T>()
        ),
    }
}
