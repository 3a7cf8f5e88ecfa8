use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

/// A pending write, applied to the context on the next `sync_computes`.
pub struct Update {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
    pub(crate) value: Box<dyn Any + Send>,
}

/// Channel pair shared by every updater of one context.
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }
}

/// Sends replacement values for states or computes back to the owning context.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub fn set<T: Any + Send>(&self, value: T) {
        let update = Update {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            value: Box::new(value),
        };
        if self.send.send(update).is_err() {
            // receiver lives in the context; it is gone after teardown
            debug!("Updater: context dropped, discarding {}", type_name::<T>());
        }
    }
}

/// Updater bound to one command task.
///
/// Once the task's token is cancelled, because a newer dispatch of the same command replaced
/// it or the context was torn down, every `set` is dropped.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    cancel: CancellationToken,
}

impl LatestOnlyUpdater {
    pub fn new(inner: Updater, cancel: CancellationToken) -> Self {
        Self { inner, cancel }
    }

    pub fn is_stale(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self.is_stale() {
            warn!(
                "LatestOnlyUpdater: dropping {} from a cancelled task",
                type_name::<T>()
            );
            return;
        }
        self.inner.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updater_sends_through_runtime() {
        let runtime = StateRuntime::new();
        runtime.updater().set(7_u32);

        let updates: Vec<Update> = runtime.drain().collect();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].id, TypeId::of::<u32>());
        assert_eq!(updates[0].value.downcast_ref::<u32>(), Some(&7));
    }

    #[test]
    fn latest_only_updater_drops_after_cancel() {
        let runtime = StateRuntime::new();
        let token = CancellationToken::new();
        let updater = LatestOnlyUpdater::new(runtime.updater(), token.clone());

        updater.set(1_u8);
        token.cancel();
        updater.set(2_u8);

        assert!(updater.is_stale());
        assert_eq!(runtime.drain().count(), 1);
    }
}
