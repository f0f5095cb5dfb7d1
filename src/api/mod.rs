//! LiquidPlanner API access.
//!
//! Two layers:
//!
//! - **Transport**: moves an [`ApiRequest`] to the server and hands back the
//!   [`RawResponse`] untouched. [`HttpTransport`] is the reqwest version.
//! - **Client**: [`LiquidPlanner`] builds requests, attaches the bearer token
//!   and decodes JSON into the models in [`models`].
//!
//! Splitting them keeps the client testable against a canned transport.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lp_time::api::{HttpTransport, LiquidPlanner};
//! use lp_time::libs::config::Config;
//! use lp_time::libs::credential::Credential;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let credential = Credential::new("token", config.data_dir.join("auth-token"));
//! let mut client = LiquidPlanner::new(credential, HttpTransport::new(&config.api_url), &config.space_url);
//! client.validate().await?;
//! let workspaces = client.workspaces().await?;
//! client.set_workspace_id(workspaces[0].id);
//! # Ok(())
//! # }
//! ```

use crate::libs::error::LpError;
use crate::msg_debug;
use reqwest::Client;
use serde_json::Value;

pub mod liquidplanner;
pub mod models;

pub use liquidplanner::LiquidPlanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`
    pub path: String,
    /// Query pairs in order; keys may repeat (`filter[]`)
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body exactly as the server sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves requests to the server.
///
/// Implementations must not interpret the response; non-2xx statuses are a
/// normal `Ok` result.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, LpError>;
}

impl<T: Transport> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, LpError> {
        (**self).send(request).await
    }
}

/// reqwest transport. No timeout and no retries are configured.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, LpError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|err| LpError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| LpError::Transport(err.to_string()))?;

        msg_debug!(format!("{} {} -> {}", request.method.as_str(), request.path, status));
        Ok(RawResponse { status, body })
    }
}
