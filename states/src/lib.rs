//! Reactive state runtime for the user table.
//!
//! - [`State`]: plain values owned by the context, mutated by UI events or updaters.
//! - [`Compute`]: derived values, re-run in dependency order when an input changes.
//! - [`Command`]: explicitly dispatched async side effects that report back via an updater.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod runtime;
mod snapshot;
mod state;
mod state_sync_status;
mod task;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use runtime::{LatestOnlyUpdater, StateRuntime, Updater};
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
