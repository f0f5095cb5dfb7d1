pub mod track;

use crate::api::HttpTransport;
use crate::libs::branch::Git;
use crate::libs::config::Config;
use crate::libs::error::LpError;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::libs::prompt::TerminalPrompter;
use crate::{msg_error, msg_print};
use clap::Parser;
use track::{Outcome, TimeTracker};
use tracing_subscriber::EnvFilter;

/// Log hours against the LiquidPlanner task named after the current git branch.
///
/// Takes no arguments: run it inside the repository you worked in.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Runs the tracking flow and returns the process exit code.
    pub async fn menu() -> i32 {
        let _cli = Self::parse();
        init_tracing();

        let config = Config::from_env();
        let prompter = TerminalPrompter;
        let git = Git::new();
        let tracker = TimeTracker::new(&config, HttpTransport::new(&config.api_url), &prompter, &git);

        let result = tokio::select! {
            result = tracker.run() => result,
            _ = interrupted() => Err(LpError::Interrupted.into()),
        };
        exit_code(result)
    }
}

/// Turns the result of a run into an exit code, printing fatal errors.
pub fn exit_code(result: anyhow::Result<Outcome>) -> i32 {
    let err = match result {
        Ok(_) => return 0,
        Err(err) => err,
    };

    match err.downcast_ref::<LpError>() {
        Some(LpError::Interrupted) => {
            msg_print!(Message::ShutdownRequested, true);
            0
        }
        Some(lp_error) => {
            msg_error!(lp_error, true);
            lp_error.exit_code()
        }
        None => {
            msg_error!(err, true);
            1
        }
    }
}

async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; only the flow can finish the run.
        std::future::pending::<()>().await;
    }
}

/// Structured logging is only wired up in debug mode; normal runs print
/// plain messages.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lp_time=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
