use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
};

use crate::{Compute, State, ctx::ComputeSlot};

/// Read-only view of the context handed to [`Compute::compute`].
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, ComputeSlot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, ComputeSlot>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Option<&'a T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
    }

    pub fn try_compute<T: Compute>(&self) -> Option<&'a T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never added to the context; a compute declaring it as a dependency
    /// without registering it is a wiring bug.
    pub fn state<T: State>(&self) -> &'a T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never recorded in the context.
    pub fn compute<T: Compute>(&self) -> &'a T {
        self.try_compute::<T>()
            .unwrap_or_else(|| panic!("Compute {} is not recorded", type_name::<T>()))
    }
}
