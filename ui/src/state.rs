use user_table_business::{Route, UserTableConfig, register_user_table};
use user_table_states::StateCtx;

/// The main application state.
pub struct State {
    /// Context of the mounted user table. Replaced wholesale on remount.
    pub ctx: StateCtx,
    pub route: Route,
    /// Kept so a remount can build an identical context.
    pub config: UserTableConfig,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Route::Users, UserTableConfig::default())
    }
}

impl State {
    pub fn new(route: Route, config: UserTableConfig) -> Self {
        Self {
            ctx: mount_ctx(config.clone()),
            route,
            config,
        }
    }

    /// State pointed at a mock proxy, e.g. `format!("{}/raw?url=", server.uri())`.
    pub fn test(proxy_url: &str) -> Self {
        Self::new(
            Route::Users,
            UserTableConfig::new(user_table_business::USERS_ENDPOINT, proxy_url),
        )
    }
}

/// A fresh context with the user table registered and its computes initialised.
pub fn mount_ctx(config: UserTableConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    register_user_table(&mut ctx, config);
    ctx.run_computed();
    ctx
}
