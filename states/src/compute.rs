use std::any::{Any, TypeId, type_name};

use log::warn;

use crate::{Dep, State, Updater};

/// Ids a compute reads from. Built with [`ComputeDeps::new`] and the `state`/`compute` adders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeDeps {
    states: Vec<TypeId>,
    computes: Vec<TypeId>,
}

impl ComputeDeps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state<T: State>(mut self) -> Self {
        self.states.push(TypeId::of::<T>());
        self
    }

    pub fn compute<T: Compute>(mut self) -> Self {
        self.computes.push(TypeId::of::<T>());
        self
    }

    pub fn states(&self) -> &[TypeId] {
        &self.states
    }

    pub fn computes(&self) -> &[TypeId] {
        &self.computes
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.states.iter().chain(self.computes.iter()).copied()
    }
}

/// A derived value, recomputed by [`StateCtx::run_computed`](crate::StateCtx::run_computed)
/// whenever one of its dependencies changes.
///
/// `compute` must stay free of side effects: it may run at startup and on every dependency
/// change. The new value is written through the `Updater`. Network IO belongs in a
/// [`Command`](crate::Command).
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared body for `Compute::assign_box`.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => warn!("assign_impl: ignored update of wrong type for {}", type_name::<T>()),
    }
}
