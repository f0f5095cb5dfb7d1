//! Display implementation for lp-time messages.
//!
//! All user-facing text lives here so wording stays consistent between the
//! console output, error values and log lines.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CREDENTIAL MESSAGES ===
            Message::TokenMissing => {
                "Authentication token does not exist. Please go to LiquidPlanner >> Settings >> My API Tokens and generate a key."
                    .to_string()
            }
            Message::PromptToken => "Please enter a valid API key now. It will be saved for future use".to_string(),
            Message::TokenSaved(path) => format!("Token saved to {}", path),
            Message::InvalidToken(path) => format!(
                "Invalid API key was passed in or LiquidPlanner is down. Please double check the key in {}",
                path
            ),

            // === WORKSPACE MESSAGES ===
            Message::NoWorkspace => "Your account is not a member of any workspace".to_string(),
            Message::WorkspaceSelected(name) => format!("Using workspace '{}'", name),
            Message::WorkspaceNotSelected => "No workspace selected for this client".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::NoDefaultActivity => "No default activity for your user found. Please select an activity.".to_string(),
            Message::ActivitiesHeader => "Available activities".to_string(),
            Message::PromptActivityId => "Enter an activity ID".to_string(),
            Message::DefaultActivityNotFound(account_id) => {
                format!("Member {} has no default activity configured", account_id)
            }

            // === BRANCH MESSAGES ===
            Message::BranchNameUnavailable(reason) => format!(
                "Could not retrieve git branch name ({}). Are you sure that you are in the right location?",
                reason
            ),

            // === TASK MESSAGES ===
            Message::SearchingTask(query) => format!("Looking for active tasks matching '{}'", query),
            Message::TaskNotFound(query) => format!("Couldn't find an active task matching '{}'", query),
            Message::TaskFound(name) => format!("Task found: {}", name),
            Message::TaskUrl(url) => format!("LP URL: {}", url),
            Message::TaskAbortHint => "If this is not the task you wanted, please hit CTRL+C to exit".to_string(),

            // === TIME TRACKING MESSAGES ===
            Message::PromptHours => "Please enter number of hours for your timesheet".to_string(),
            Message::HoursMustBePositive(input) => format!(
                "Entry must be a positive number, got '{}'. Not entering any time. Please update your timesheet manually!",
                input
            ),
            Message::TimeTracked(name) => format!("Time successfully tracked for {}", name),

            // === API MESSAGES ===
            Message::ApiRequestFailed { status, path } => format!("LiquidPlanner returned {} for {}", status, path),
            Message::ApiDecodeFailed(path) => format!("Unexpected response format from {}", path),
            Message::ApiEncodeFailed(path) => format!("Could not build the request body for {}", path),
            Message::TransportFailed(reason) => format!("Failed to reach LiquidPlanner: {}", reason),

            // === GENERAL MESSAGES ===
            Message::ShutdownRequested => "Shutdown requested ... exiting".to_string(),
            Message::PromptFailed(reason) => format!("Failed to read input: {}", reason),
        };
        write!(f, "{}", text)
    }
}
