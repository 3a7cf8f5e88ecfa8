//! Base-list loader: compute-shaped cache + the command that fills it.
//!
//! Fetching is a side effect, so it does not live in a compute (computes run implicitly at
//! startup and on every dependency change). Instead:
//! - `UsersLoadCompute` holds the latest `Loading | Loaded | Error` result;
//! - `LoadUsersCommand` is dispatched once on mount, performs the request and writes the
//!   compute through its updater.
//!
//! The command races the fetch against its cancellation token, and its updater drops
//! writes after cancellation, so a view torn down mid-request is never updated.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info};
use tokio_util::sync::CancellationToken;
use user_table_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, LatestOnlyUpdater,
    Updater, assign_impl,
};

use crate::UserTableConfig;

use super::{LoadUsersError, User, api};

/// Exactly one of loading, loaded or failed. A fresh mount starts in `Loading`.
#[derive(Debug, Clone, Default)]
pub enum UsersLoadResult {
    #[default]
    Loading,
    Loaded {
        users: Vec<User>,
        fetched_at: DateTime<Utc>,
    },
    Error(LoadUsersError),
}

#[derive(Debug, Clone, Default)]
pub struct UsersLoadCompute {
    pub result: UsersLoadResult,
}

impl UsersLoadCompute {
    pub fn loading() -> Self {
        Self {
            result: UsersLoadResult::Loading,
        }
    }

    pub fn loaded(users: Vec<User>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            result: UsersLoadResult::Loaded { users, fetched_at },
        }
    }

    pub fn failed(err: LoadUsersError) -> Self {
        Self {
            result: UsersLoadResult::Error(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, UsersLoadResult::Loading)
    }

    /// The base list, once loaded.
    pub fn users(&self) -> Option<&[User]> {
        match &self.result {
            UsersLoadResult::Loaded { users, .. } => Some(users.as_slice()),
            _ => None,
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &self.result {
            UsersLoadResult::Loaded { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadUsersError> {
        match &self.result {
            UsersLoadResult::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl Compute for UsersLoadCompute {
    fn deps(&self) -> ComputeDeps {
        // written by LoadUsersCommand only
        ComputeDeps::new()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches the base list. Dispatch via `ctx.dispatch::<LoadUsersCommand>()`.
#[derive(Debug, Default)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let config: UserTableConfig = snap.state::<UserTableConfig>();

        Box::pin(async move {
            updater.set(UsersLoadCompute::loading());

            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("LoadUsersCommand: cancelled before the response arrived");
                    return;
                }
                result = api::fetch_users(&config) => result,
            };

            match result {
                Ok(users) => {
                    info!("LoadUsersCommand: loaded {} users", users.len());
                    updater.set(UsersLoadCompute::loaded(users, Utc::now()));
                }
                Err(err) => {
                    error!("LoadUsersCommand: {err}");
                    updater.set(UsersLoadCompute::failed(err));
                }
            }
        })
    }
}
