//! Time tracking flow.
//!
//! Runs the whole interactive session in a fixed order:
//!
//! 1. **Credential**: Load the cached token or ask for one
//! 2. **Validation**: Check the token against `/account`
//! 3. **Workspace**: Bind the client to the first workspace
//! 4. **Activity**: Use the member's default activity, or let the user pick one
//! 5. **Task**: Look up the most recent active task named after the git branch
//! 6. **Hours**: Ask for hours and book them against the task
//!
//! Every outside dependency (HTTP, terminal, git) is injected, so the flow
//! runs unchanged against scripted stand-ins.

use crate::api::models::Task;
use crate::api::{LiquidPlanner, Transport};
use crate::libs::branch::BranchSource;
use crate::libs::config::Config;
use crate::libs::credential::CredentialStore;
use crate::libs::error::LpError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompter;
use crate::libs::view::View;
use crate::{msg_debug, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Hours were booked against `task`.
    Tracked { task: Task, hours: f64 },
    /// The hours entry was rejected, nothing was submitted.
    Skipped { input: String },
}

pub struct TimeTracker<'a, T, P, B> {
    config: &'a Config,
    transport: T,
    prompter: &'a P,
    branch: &'a B,
}

impl<'a, T, P, B> TimeTracker<'a, T, P, B>
where
    T: Transport,
    P: Prompter,
    B: BranchSource,
{
    pub fn new(config: &'a Config, transport: T, prompter: &'a P, branch: &'a B) -> Self {
        Self {
            config,
            transport,
            prompter,
            branch,
        }
    }

    pub async fn run(self) -> Result<Outcome> {
        let store = CredentialStore::new(&self.config.data_dir);
        let credential = store.load(self.prompter).await?;

        let mut client = LiquidPlanner::new(credential, self.transport, &self.config.space_url);
        client.validate().await?;

        let workspace = client.workspaces().await?.into_iter().next().ok_or(LpError::NoWorkspace)?;
        msg_debug!(Message::WorkspaceSelected(workspace.name.clone()));
        client.set_workspace_id(workspace.id);

        let account = client.account().await?;
        let activity_id = match client.retrieve_default_activity_id(account.id).await {
            Ok(activity_id) => activity_id,
            Err(LpError::DefaultActivityNotFound(_)) => {
                msg_warning!(Message::NoDefaultActivity, true);
                msg_print!(Message::ActivitiesHeader);
                View::activities(&client.retrieve_activities().await?);
                self.prompter.ask_activity_id().await?
            }
            Err(err) => return Err(err.into()),
        };

        let branch_name = self.branch.current_branch_name()?;
        msg_debug!(Message::SearchingTask(branch_name.clone()));
        let task = resolve_current_task(&client, &branch_name).await?;

        msg_print!(Message::TaskFound(task.name.clone()));
        msg_print!(Message::TaskUrl(client.task_url(task.id)?));
        msg_info!(Message::TaskAbortHint);

        let input = self.prompter.ask_hours().await?;
        let hours = match parse_hours(&input) {
            Ok(hours) => hours,
            Err(err) => {
                msg_warning!(err, true);
                return Ok(Outcome::Skipped { input });
            }
        };

        client.track_time(activity_id, task.id, hours).await?;
        msg_success!(Message::TimeTracked(task.name.clone()), true);

        Ok(Outcome::Tracked { task, hours })
    }
}

/// The first, most recently updated, active task matching `name`.
pub async fn resolve_current_task<T: Transport>(client: &LiquidPlanner<T>, name: &str) -> Result<Task, LpError> {
    client
        .find_tasks_by_fuzzy_name(name)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| LpError::TaskNotFound(name.to_string()))
}

/// Hours must be a finite number above zero.
pub fn parse_hours(input: &str) -> Result<f64, LpError> {
    match input.trim().parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours > 0.0 => Ok(hours),
        _ => Err(LpError::InvalidHours(input.to_string())),
    }
}
