use std::any::{Any, type_name};

use log::warn;

/// A value owned by [`StateCtx`](crate::StateCtx) and mutated by the UI or by updaters.
///
/// Implementors that should be visible to commands return a clone from `snapshot`.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// A `Send` copy handed to commands. `None` keeps the state out of command snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value produced by an [`Updater`](crate::Updater).
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared body for `State::assign_box`.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("state_assign_impl: ignored update of wrong type for {}", type_name::<T>()),
    }
}
