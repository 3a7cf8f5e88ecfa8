//! Business layer of the user table: the user model, data loading, and the filter,
//! pagination and selection engines, wired into a [`user_table_states::StateCtx`].

pub mod config;
pub mod http;
pub mod route;
pub mod users;

mod test_utils;

pub use config::{CORS_PROXY_URL, USERS_ENDPOINT, UserTableConfig};
pub use http::{Client, HttpError, HttpResult, Response};
pub use route::{Route, USERS_PATH};
pub use users::{
    FilteredUsersCompute, LoadUsersCommand, LoadUsersError, PageWindow, PageWindowCompute,
    Selection, TablePresentation, User, UserSearchInput, UserSelection, UserTablePage,
    UsersLoadCompute, UsersLoadResult, current_presentation, register_user_table,
};
