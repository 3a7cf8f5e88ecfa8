//! Handles for command tasks spawned by [`StateCtx::dispatch`](crate::StateCtx::dispatch).
//!
//! Each dispatched command gets a `TaskId` (command type + generation) and a
//! `CancellationToken`. The context keeps one live `TaskHandle` per command type:
//! - dispatching the same command again cancels the previous handle;
//! - tearing the context down cancels all of them.
//!
//! Cancellation is cooperative. Command futures race `token.cancelled()` in `tokio::select!`,
//! and their `LatestOnlyUpdater` refuses writes once the token fires.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies one spawned task: which command type, and which dispatch of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Signals the task; it stops at its next cancellation check point.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
