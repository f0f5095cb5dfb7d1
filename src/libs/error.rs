//! Error types surfaced by the lp-time flow.
//!
//! Variants carry just enough context for the entry point to print a
//! remediation line and pick an exit code. Their text comes from [`Message`]
//! so console output and error values read the same.

use crate::libs::messages::Message;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LpError {
    /// The cached token could not be read.
    #[error("credential file {} could not be read", .0.display())]
    CredentialMissing(PathBuf),

    /// `/account` did not answer 200 for the stored token.
    #[error("{}", Message::InvalidToken(.0.display().to_string()))]
    Authentication(PathBuf),

    #[error("{}", Message::NoWorkspace)]
    NoWorkspace,

    #[error("{}", Message::WorkspaceNotSelected)]
    WorkspaceNotSelected,

    #[error("{}", Message::DefaultActivityNotFound(.0.to_owned()))]
    DefaultActivityNotFound(u64),

    #[error("{}", Message::BranchNameUnavailable(.0.clone()))]
    BranchNameUnavailable(String),

    #[error("{}", Message::TaskNotFound(.0.clone()))]
    TaskNotFound(String),

    #[error("{}", Message::HoursMustBePositive(.0.clone()))]
    InvalidHours(String),

    #[error("{}", api_failed(.status, .path))]
    Api { status: u16, path: String },

    #[error("{}", Message::ApiDecodeFailed(.path.clone()))]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", Message::ApiEncodeFailed(.path.clone()))]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", Message::TransportFailed(.0.clone()))]
    Transport(String),

    /// The user pressed CTRL+C, either at a prompt or between steps.
    #[error("{}", Message::ShutdownRequested)]
    Interrupted,
}

fn api_failed(status: &u16, path: &str) -> Message {
    Message::ApiRequestFailed {
        status: *status,
        path: path.to_string(),
    }
}

impl LpError {
    /// Process exit code for a run that ended with this error.
    ///
    /// An interrupt is a clean shutdown, everything else reaching the entry
    /// point is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            LpError::Interrupted => 0,
            _ => 1,
        }
    }
}
