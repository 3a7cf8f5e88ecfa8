use std::{any::Any, future::Future, pin::Pin};

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// An explicitly dispatched side effect, e.g. a network request.
///
/// `run` is called synchronously by [`StateCtx::dispatch`](crate::StateCtx::dispatch) with an
/// owned snapshot of the context; the returned future is spawned and reports back only through
/// the updater.
pub trait Command: Any + Send + Sync {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
