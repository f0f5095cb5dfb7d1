#![allow(dead_code)]

use anyhow::{bail, Result};
use lp_time::api::{ApiRequest, Method, RawResponse, Transport};
use lp_time::libs::branch::BranchSource;
use lp_time::libs::config::Config;
use lp_time::libs::error::LpError;
use lp_time::libs::prompt::Prompter;
use serde_json::Value;
use std::cell::RefCell;
use std::path::Path;

pub const API_URL: &str = "http://lp.test/api";
pub const SPACE_URL: &str = "http://lp.test/space";

pub fn test_config(data_dir: &Path) -> Config {
    Config::new(API_URL, SPACE_URL, data_dir)
}

/// Canned responses keyed by method and path; records every request.
#[derive(Default)]
pub struct MockTransport {
    routes: Vec<(Method, String, RawResponse)>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.routes.push((method, path.to_string(), RawResponse::new(status, body.to_string())));
        self
    }

    pub fn with_raw(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes.push((method, path.to_string(), RawResponse::new(status, body)));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, LpError> {
        self.requests.borrow_mut().push(request.clone());
        let response = self
            .routes
            .iter()
            .find(|(method, path, _)| *method == request.method && *path == request.path)
            .map(|(_, _, response)| response.clone())
            .unwrap_or_else(|| RawResponse::new(404, r#"{"error":"NotFound"}"#));
        Ok(response)
    }
}

/// Answers prompts from a script; an unscripted prompt fails the run.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub token: Option<String>,
    pub activity_id: Option<u64>,
    pub hours: Option<String>,
    asked: RefCell<Vec<&'static str>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn activity_id(mut self, activity_id: u64) -> Self {
        self.activity_id = Some(activity_id);
        self
    }

    pub fn hours(mut self, hours: &str) -> Self {
        self.hours = Some(hours.to_string());
        self
    }

    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    async fn ask_token(&self) -> Result<String> {
        self.asked.borrow_mut().push("token");
        match &self.token {
            Some(token) => Ok(token.clone()),
            None => bail!("unexpected token prompt"),
        }
    }

    async fn ask_activity_id(&self) -> Result<u64> {
        self.asked.borrow_mut().push("activity");
        match self.activity_id {
            Some(activity_id) => Ok(activity_id),
            None => bail!("unexpected activity prompt"),
        }
    }

    async fn ask_hours(&self) -> Result<String> {
        self.asked.borrow_mut().push("hours");
        match &self.hours {
            Some(hours) => Ok(hours.clone()),
            None => bail!("unexpected hours prompt"),
        }
    }
}

/// Branch source with a fixed answer; `None` behaves like running outside git.
pub struct FixedBranch(pub Option<String>);

impl FixedBranch {
    pub fn named(name: &str) -> Self {
        Self(Some(name.to_string()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl BranchSource for FixedBranch {
    fn current_branch_name(&self) -> Result<String, LpError> {
        self.0
            .clone()
            .ok_or_else(|| LpError::BranchNameUnavailable("not a git repository".to_string()))
    }
}
