//! Mock-server helpers for the users domain.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_users(sample_users_json(12)).await;
//! test_ctx.load_and_wait().await;
//! let load = test_ctx.ctx.cached::<UsersLoadCompute>().unwrap();
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::{Duration, Instant};

use serde_json::Value;
use user_table_states::StateCtx;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::{
    LoadUsersCommand, USERS_ENDPOINT, UserTableConfig, UsersLoadCompute, register_user_table,
};

/// Nothing listens here, so requests fail at connect.
const UNREACHABLE_PROXY: &str = "http://127.0.0.1:1/raw?url=";

pub struct TestContext {
    /// `None` for [`TestContext::unreachable`].
    pub mock_server: Option<MockServer>,
    pub ctx: StateCtx,
}

impl TestContext {
    /// Context whose proxy is a fresh mock server, forwarding to the real endpoint URL.
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        let proxy = format!("{}/raw?url=", mock_server.uri());

        Self {
            ctx: build_test_state_ctx(UserTableConfig::new(USERS_ENDPOINT, &proxy)),
            mock_server: Some(mock_server),
        }
    }

    pub fn unreachable() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        Self {
            mock_server: None,
            ctx: build_test_state_ctx(UserTableConfig::new(USERS_ENDPOINT, UNREACHABLE_PROXY)),
        }
    }

    async fn mount(&self, response: ResponseTemplate) {
        let Some(server) = &self.mock_server else {
            panic!("TestContext::unreachable has no mock server");
        };

        Mock::given(method("GET"))
            .and(path("/raw"))
            .and(query_param("url", USERS_ENDPOINT))
            .respond_with(response)
            .mount(server)
            .await;
    }

    pub async fn mock_users(&self, body: Value) {
        self.mount(ResponseTemplate::new(200).set_body_json(body)).await;
    }

    pub async fn mock_users_delayed(&self, body: Value, delay: Duration) {
        self.mount(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay),
        )
        .await;
    }

    pub async fn mock_status(&self, status: u16) {
        self.mount(ResponseTemplate::new(status).set_body_string("oops"))
            .await;
    }

    /// Dispatches `LoadUsersCommand` and pumps the context until the load leaves `Loading`.
    pub async fn load_and_wait(&mut self) {
        self.ctx.run_computed();
        self.ctx.dispatch::<LoadUsersCommand>();

        let timeout = Duration::from_secs(5);
        let start = Instant::now();

        loop {
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.ctx.sync_computes();
            self.ctx.run_computed();

            let loading = self
                .ctx
                .cached::<UsersLoadCompute>()
                .is_none_or(|load| load.is_loading());
            if !loading {
                return;
            }
            if start.elapsed() > timeout {
                panic!("Timed out waiting for LoadUsersCommand");
            }
        }
    }
}

fn build_test_state_ctx(config: UserTableConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    register_user_table(&mut ctx, config);
    ctx
}

/// `count` users shaped like the real endpoint's records, ids `1..=count`.
pub fn sample_users_json(count: u64) -> Value {
    Value::Array((1..=count).map(sample_user_json).collect())
}

pub fn sample_user_json(id: u64) -> Value {
    serde_json::json!({
        "id": id,
        "firstname": format!("First{id}"),
        "lastname": format!("Last{id}"),
        "email": format!("user{id}@example.com"),
        "birthDate": "1990-01-01",
        "login": {
            "uuid": format!("uuid-{id}"),
            "username": format!("user{id}"),
            "password": "secret",
            "md5": "",
            "sha1": "",
            "registered": "2020-01-01T00:00:00Z"
        },
        "address": {
            "street": "Main Street",
            "suite": "Apt. 1",
            "city": "Springfield",
            "zipcode": "12345",
            "geo": { "lat": "0.0", "lng": "0.0" }
        },
        "phone": "555-0100",
        "website": "example.com",
        "company": {
            "name": "Acme",
            "catchPhrase": "We make things",
            "bs": "synergy"
        }
    })
}
