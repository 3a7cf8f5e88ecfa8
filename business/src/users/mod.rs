//! Users domain: the user table's states, computes and the load command.
//!
//! Pipeline, re-derived in one `run_computed` pass:
//! `UsersLoadCompute` + `UserSearchInput` -> `FilteredUsersCompute` (resets `UserTablePage`)
//! -> `PageWindowCompute` (+ `UserTablePage`, `UserTableConfig`).
//!
//! `UserSelection` sits outside the pipeline and changes only on explicit toggles.
//!
//! UI code should read via `ctx.cached::<T>()` / `ctx.state::<T>()` and mutate only through
//! `ctx.state_mut::<T>()` and `ctx.dispatch::<LoadUsersCommand>()`.

pub mod api;
pub mod error;
pub mod filter;
pub mod load;
pub mod model;
pub mod pagination;
pub mod presentation;
pub mod selection;

pub use error::{DATA_FORMAT_MESSAGE, LoadUsersError};
pub use filter::{FilteredUsersCompute, UserSearchInput, derive_filtered, matches_term};
pub use load::{LoadUsersCommand, UsersLoadCompute, UsersLoadResult};
pub use model::{Address, Company, Geo, Login, User};
pub use pagination::{
    DEFAULT_PAGE_SIZE, PageWindow, PageWindowCompute, UserTablePage, clamp_page, derive_page,
    total_pages,
};
pub use presentation::{TablePresentation, table_presentation};
pub use selection::{Selection, UserSelection};

use log::error;
use user_table_states::StateCtx;

use crate::UserTableConfig;

/// Adds every state, compute and command the user table needs to a fresh context.
///
/// Nothing is fetched until `LoadUsersCommand` is dispatched.
pub fn register_user_table(ctx: &mut StateCtx, config: UserTableConfig) {
    ctx.add_state(config);
    ctx.add_state(UserSearchInput::default());
    ctx.add_state(UserTablePage::default());
    ctx.add_state(UserSelection::default());

    ctx.record_compute(UsersLoadCompute::default());
    ctx.record_compute(FilteredUsersCompute::default());
    ctx.record_compute(PageWindowCompute::default());

    ctx.record_command(LoadUsersCommand);

    if let Err(err) = ctx.verify_deps() {
        error!("register_user_table: {err}");
    }
}

/// Presentation of the table in `ctx`, see [`table_presentation`].
pub fn current_presentation(ctx: &StateCtx) -> TablePresentation {
    match (
        ctx.cached::<UsersLoadCompute>(),
        ctx.cached::<FilteredUsersCompute>(),
    ) {
        (Some(load), Some(filtered)) => table_presentation(load, filtered),
        _ => TablePresentation::Loading,
    }
}
