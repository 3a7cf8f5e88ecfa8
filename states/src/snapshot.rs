use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

/// Owned copies of every snapshot-able state and compute, taken when a command is dispatched.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn try_get<T: Clone + 'static>(&self) -> Option<T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
    }

    /// # Panics
    /// Panics if `T` has no snapshot, i.e. it is unregistered or returns `None` from `snapshot`.
    pub fn state<T: Clone + 'static>(&self) -> T {
        self.try_get::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    /// # Panics
    /// Same as [`CommandSnapshot::state`].
    pub fn compute<T: Clone + 'static>(&self) -> T {
        self.try_get::<T>()
            .unwrap_or_else(|| panic!("Compute snapshot for {} is missing", type_name::<T>()))
    }
}
