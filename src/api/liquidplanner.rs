//! Typed LiquidPlanner client.
//!
//! Wraps a [`Transport`] with the bearer token and turns the raw JSON of
//! each resource into [`models`](super::models). Workspace-scoped resources
//! need [`LiquidPlanner::set_workspace_id`] first.
//!
//! Ids are numbers (`u64`) in both directions, including the values of
//! [`LiquidPlanner::retrieve_activities`] and the `activity_id` sent to
//! `track_time`.

use super::models::{Account, Activity, Member, Project, Task, TimeEntry, Workspace};
use super::{ApiRequest, Method, RawResponse, Transport};
use crate::libs::credential::Credential;
use crate::libs::error::LpError;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

const ACCOUNT_PATH: &str = "/account";
const WORKSPACES_PATH: &str = "/workspaces";

/// Task-list filters understood by the server.
const FILTER_PARAM: &str = "filter[]";
const NOT_DONE_FILTER: &str = "is_done is false";
const ORDER_PARAM: &str = "order";
const ORDER_BY_UPDATED: &str = "updated_at";

#[derive(Debug)]
pub struct LiquidPlanner<T: Transport> {
    transport: T,
    credential: Credential,
    space_url: String,
    workspace_id: Option<u64>,
}

impl<T: Transport> LiquidPlanner<T> {
    pub fn new(credential: Credential, transport: T, space_url: &str) -> Self {
        Self {
            transport,
            credential,
            space_url: space_url.trim_end_matches('/').to_string(),
            workspace_id: None,
        }
    }

    pub fn workspace_id(&self) -> Option<u64> {
        self.workspace_id
    }

    pub fn set_workspace_id(&mut self, workspace_id: u64) {
        self.workspace_id = Some(workspace_id);
    }

    /// Checks the token against `/account`.
    ///
    /// Anything but a 200 is reported as an authentication failure naming
    /// the credential file, including transport errors.
    pub async fn validate(&self) -> Result<(), LpError> {
        match self.get(ACCOUNT_PATH).await {
            Ok(response) if response.status == 200 => Ok(()),
            _ => Err(LpError::Authentication(self.credential.path().to_path_buf())),
        }
    }

    pub async fn get(&self, path: &str) -> Result<RawResponse, LpError> {
        self.send(Method::Get, path, Vec::new(), None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<RawResponse, LpError> {
        self.send(Method::Post, path, Vec::new(), Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<RawResponse, LpError> {
        self.send(Method::Put, path, Vec::new(), Some(body)).await
    }

    pub async fn account(&self) -> Result<Account, LpError> {
        self.fetch(ACCOUNT_PATH, Vec::new()).await
    }

    pub async fn workspaces(&self) -> Result<Vec<Workspace>, LpError> {
        self.fetch(WORKSPACES_PATH, Vec::new()).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, LpError> {
        self.fetch(&self.workspace_path("/projects")?, Vec::new()).await
    }

    pub async fn tasks(&self) -> Result<Vec<Task>, LpError> {
        self.fetch(&self.workspace_path("/tasks")?, Vec::new()).await
    }

    pub async fn activities(&self) -> Result<Vec<Activity>, LpError> {
        self.fetch(&self.workspace_path("/activities")?, Vec::new()).await
    }

    pub async fn members(&self) -> Result<Vec<Member>, LpError> {
        self.fetch(&self.workspace_path("/members")?, Vec::new()).await
    }

    /// Active tasks whose name contains `name`, most recently updated first.
    pub async fn find_tasks_by_fuzzy_name(&self, name: &str) -> Result<Vec<Task>, LpError> {
        self.find_active_tasks(format!("name contains {}", name)).await
    }

    /// Active tasks named exactly `name` (case-sensitive), most recently updated first.
    pub async fn find_tasks_by_exact_name(&self, name: &str) -> Result<Vec<Task>, LpError> {
        self.find_active_tasks(format!("name = {}", name)).await
    }

    /// Books `hours` of `activity_id` against a task and returns the updated task.
    pub async fn track_time(&self, activity_id: u64, task_id: u64, hours: f64) -> Result<Task, LpError> {
        let path = self.workspace_path(&format!("/tasks/{}/track_time", task_id))?;
        let body = serde_json::to_value(TimeEntry::new(activity_id, hours))
            .map_err(|source| LpError::Encode { path: path.clone(), source })?;
        let response = self.post(&path, body).await?;
        decode(&path, response)
    }

    pub async fn create_task(&self, name: &str) -> Result<Task, LpError> {
        let path = self.workspace_path("/tasks")?;
        let response = self.post(&path, json!({ "name": name })).await?;
        decode(&path, response)
    }

    /// Link to the task in the LiquidPlanner web UI.
    pub fn task_url(&self, task_id: u64) -> Result<String, LpError> {
        let workspace_id = self.workspace_id.ok_or(LpError::WorkspaceNotSelected)?;
        Ok(format!("{}/{}/projects/show/{}", self.space_url, workspace_id, task_id))
    }

    /// Activity ids keyed by name. A repeated name keeps the last id seen.
    pub async fn retrieve_activities(&self) -> Result<BTreeMap<String, u64>, LpError> {
        let activities = self.activities().await?;
        Ok(activities.into_iter().map(|activity| (activity.name, activity.id)).collect())
    }

    /// Default activity of the member with `account_id`.
    ///
    /// Members without a configured default are left out of the lookup, so
    /// they fail the same way as an unknown account.
    pub async fn retrieve_default_activity_id(&self, account_id: u64) -> Result<u64, LpError> {
        let defaults: HashMap<u64, u64> = self
            .members()
            .await?
            .into_iter()
            .filter_map(|member| member.default_activity_id.map(|activity_id| (member.id, activity_id)))
            .collect();

        defaults
            .get(&account_id)
            .copied()
            .ok_or(LpError::DefaultActivityNotFound(account_id))
    }

    async fn find_active_tasks(&self, name_filter: String) -> Result<Vec<Task>, LpError> {
        let path = self.workspace_path("/tasks")?;
        let query = vec![
            (FILTER_PARAM.to_string(), name_filter),
            (FILTER_PARAM.to_string(), NOT_DONE_FILTER.to_string()),
            (ORDER_PARAM.to_string(), ORDER_BY_UPDATED.to_string()),
        ];
        let mut tasks: Vec<Task> = self.fetch(&path, query).await?;

        // Newest first by instant, not by text. Tasks without a parseable
        // timestamp go last and keep the server's relative order.
        tasks.sort_by_key(|task| Reverse(task.updated_time()));
        Ok(tasks)
    }

    async fn fetch<D: DeserializeOwned>(&self, path: &str, query: Vec<(String, String)>) -> Result<D, LpError> {
        let response = self.send(Method::Get, path, query, None).await?;
        decode(path, response)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<RawResponse, LpError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            query,
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {}", self.credential.token())),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        };
        self.transport.send(request).await
    }

    fn workspace_path(&self, suffix: &str) -> Result<String, LpError> {
        let workspace_id = self.workspace_id.ok_or(LpError::WorkspaceNotSelected)?;
        Ok(format!("{}/{}{}", WORKSPACES_PATH, workspace_id, suffix))
    }
}

fn decode<D: DeserializeOwned>(path: &str, response: RawResponse) -> Result<D, LpError> {
    if !response.is_success() {
        return Err(LpError::Api {
            status: response.status,
            path: path.to_string(),
        });
    }

    serde_json::from_str(&response.body).map_err(|source| LpError::Decode {
        path: path.to_string(),
        source,
    })
}
