//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS values. Commands must return
//! `Send` futures, so:
//! - on **native** we await reqwest directly;
//! - on **WASM** the request runs on the JS thread via `wasm_bindgen_futures::spawn_local`
//!   and the result comes back through a `flume` channel, whose receiver is `Send`.

use std::collections::HashMap;

use thiserror::Error;

/// Response with the body fully read, so it can cross threads.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            let RequestBuilder { url, headers } = self;

            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(url, headers).await;
                // receiver gone means the command was dropped; nothing to report to
                let _ = tx.send_async(result).await;
            });

            rx.recv_async()
                .await
                .map_err(|_| HttpError::new("Request cancelled"))?
        }
    }
}

async fn execute(url: String, headers: HashMap<String, String>) -> HttpResult<Response> {
    let client = reqwest::Client::new();
    let mut request = client.get(&url);
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request.send().await?;

    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();

    Ok(Response { status, body })
}

/// Entry point for building requests; only GET is needed by the table.
///
/// ```ignore
/// let response = Client::get(config.request_url())
///     .header("accept", "application/json")
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}
