//! LiquidPlanner resources as returned by the REST API.
//!
//! Only the fields lp-time reads are declared; everything else in the JSON
//! is ignored.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Account {
    pub id: u64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Top-level tenant holding projects, tasks and members.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

/// Billable-work category attached to a time entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
}

/// Workspace membership record of a user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Member {
    /// Same id as the member's [`Account`]
    pub id: u64,
    #[serde(default)]
    pub user_name: Option<String>,
    /// `null` when the member has no default activity configured
    #[serde(default)]
    pub default_activity_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_done: bool,
    /// RFC 3339 timestamp as sent by the server
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Task {
    /// `updated_at` as a point in time; `None` when absent or unparseable.
    pub fn updated_time(&self) -> Option<DateTime<FixedOffset>> {
        self.updated_at
            .as_deref()
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
    }
}

/// Body of a `track_time` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub activity_id: u64,
    /// Hours worked, sent as its decimal string
    pub work: String,
    pub is_done: bool,
}

impl TimeEntry {
    pub fn new(activity_id: u64, hours: f64) -> Self {
        Self {
            activity_id,
            work: hours.to_string(),
            is_done: false,
        }
    }
}
