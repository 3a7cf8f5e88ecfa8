use std::any::TypeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name} ({id:?})")]
    StateNotFound { id: TypeId, name: &'static str },
    #[error("Compute not found: {name} ({id:?})")]
    ComputeNotFound { id: TypeId, name: &'static str },
}

impl Error {
    pub fn state_not_found<T: 'static>() -> Self {
        Self::StateNotFound {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn compute_not_found<T: 'static>() -> Self {
        Self::ComputeNotFound {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
}
