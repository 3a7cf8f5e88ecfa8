use std::any::Any;

use user_table_states::{State, state_assign_impl};
use ustr::Ustr;

use crate::users::DEFAULT_PAGE_SIZE;

/// Users endpoint the table lists.
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.org/users";

/// Public CORS proxy; the percent-encoded target URL is appended verbatim.
pub const CORS_PROXY_URL: &str = "https://api.allorigins.win/raw?url=";

#[derive(Debug, Clone)]
pub struct UserTableConfig {
    pub users_endpoint: Ustr,
    pub proxy_url: Ustr,
    pub page_size: usize,
}

impl UserTableConfig {
    /// Points the table at another endpoint and proxy, e.g. a mock server in tests.
    pub fn new(users_endpoint: &str, proxy_url: &str) -> Self {
        Self {
            users_endpoint: Ustr::from(users_endpoint),
            proxy_url: Ustr::from(proxy_url),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// The URL actually requested: proxy prefix + percent-encoded endpoint.
    pub fn request_url(&self) -> String {
        format!(
            "{}{}",
            self.proxy_url.as_str(),
            urlencoding::encode(self.users_endpoint.as_str())
        )
    }
}

impl Default for UserTableConfig {
    fn default() -> Self {
        Self::new(USERS_ENDPOINT, CORS_PROXY_URL)
    }
}

impl State for UserTableConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
