#![allow(dead_code)]

use std::time::{Duration, Instant};

use chrono::Utc;
use serde_json::{Value, json};
use user_table_business::{
    LoadUsersCommand, USERS_ENDPOINT, User, UserTableConfig, UsersLoadCompute,
    register_user_table,
};
use user_table_states::StateCtx;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn user_json(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "firstname": first,
        "lastname": last,
        "email": format!("{}.{}@test.io", first.to_lowercase(), last.to_lowercase()),
        "login": { "username": format!("{}{id}", first.to_lowercase()) }
    })
}

/// Twelve users; only ids 2, 7 and 12 contain an "a" in a searchable field.
pub fn twelve_users() -> Value {
    let names = [
        ("Bob", "Lee"),
        ("Clara", "Voss"),
        ("Eddy", "Kim"),
        ("Finn", "Holt"),
        ("Greg", "Roe"),
        ("Ivo", "Novik"),
        ("Hank", "Toth"),
        ("Olly", "Pitt"),
        ("Rob", "Cole"),
        ("Sid", "Fox"),
        ("Ted", "Wolf"),
        ("Zoe", "Park"),
    ];
    Value::Array(
        names
            .iter()
            .zip(1u64..)
            .map(|((first, last), id)| user_json(id, first, last))
            .collect(),
    )
}

pub fn users_from(value: Value) -> Vec<User> {
    serde_json::from_value(value).unwrap()
}

/// A registered context with the given users already loaded, no network involved.
pub fn loaded_ctx(users: Vec<User>) -> StateCtx {
    let mut ctx = StateCtx::new();
    register_user_table(&mut ctx, UserTableConfig::default());
    ctx.updater().set(UsersLoadCompute::loaded(users, Utc::now()));
    ctx.sync_computes();
    ctx.run_computed();
    ctx
}

pub async fn proxy_server() -> MockServer {
    MockServer::start().await
}

pub fn proxied_config(server: &MockServer) -> UserTableConfig {
    UserTableConfig::new(USERS_ENDPOINT, &format!("{}/raw?url=", server.uri()))
}

pub async fn mount_users(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(query_param("url", USERS_ENDPOINT))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn mounted_ctx(config: UserTableConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    register_user_table(&mut ctx, config);
    ctx.run_computed();
    ctx
}

/// Dispatches the loader and pumps `ctx` until it leaves `Loading`.
pub async fn load_and_wait(ctx: &mut StateCtx) {
    ctx.dispatch::<LoadUsersCommand>();
    wait_loaded(ctx).await;
}

pub async fn wait_loaded(ctx: &mut StateCtx) {
    let start = Instant::now();
    loop {
        tokio::time::sleep(Duration::from_millis(10)).await;
        ctx.sync_computes();
        ctx.run_computed();

        if ctx
            .cached::<UsersLoadCompute>()
            .is_some_and(|load| !load.is_loading())
        {
            return;
        }
        assert!(
            start.elapsed() < Duration::from_secs(5),
            "Timed out waiting for LoadUsersCommand"
        );
    }
}
