#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use serde_json::{Value, json};
use user_table_business::{Route, USERS_ENDPOINT, UserTableConfig, UsersLoadCompute};
use user_table_ui::UserTableApp;
use user_table_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to the mock server between frames (milliseconds).
pub const NETWORK_WAIT_MS: u64 = 10;

const MAX_POLL_FRAMES: usize = 300;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, UserTableApp>,
}

impl<'a> TestCtx<'a> {
    /// App mounted at `/users` whose proxy answers with `response`.
    pub async fn new_app(response: ResponseTemplate) -> Self {
        Self::new_app_at(Route::Users, response).await
    }

    pub async fn new_app_at(route: Route, response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        mount_users(&mock_server, response).await;

        let config = UserTableConfig::new(
            USERS_ENDPOINT,
            &format!("{}/raw?url=", mock_server.uri()),
        );
        let app = UserTableApp::new(State::new(route, config));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserTableApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, UserTableApp> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Swaps the proxy's answer, e.g. before clicking Retry.
    pub async fn respond_with(&self, response: ResponseTemplate) {
        self.mock_server.reset().await;
        mount_users(&self.mock_server, response).await;
    }

    /// Steps frames until the load leaves `Loading`, then renders one more frame.
    pub async fn wait_for_load(&mut self) {
        for _ in 0..MAX_POLL_FRAMES {
            self.harness.step();
            if self
                .harness
                .state()
                .state
                .ctx
                .cached::<UsersLoadCompute>()
                .is_some_and(|load| !load.is_loading())
            {
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(NETWORK_WAIT_MS)).await;
        }
        panic!("UsersLoadCompute still loading after {MAX_POLL_FRAMES} frames");
    }

    /// Two frames: one to handle input, one to render the re-derived state.
    pub fn settle(&mut self) {
        self.harness.step();
        self.harness.step();
    }
}

async fn mount_users(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(query_param("url", USERS_ENDPOINT))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "firstname": format!("First{id}"),
        "lastname": format!("Last{id}"),
        "email": format!("user{id}@example.com"),
        "login": { "username": format!("user{id}") },
        "phone": "555-0100",
        "company": { "name": "Acme" }
    })
}

pub fn users_json(count: u64) -> Value {
    Value::Array((1..=count).map(user_json).collect())
}

pub fn users_response(count: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(users_json(count))
}
