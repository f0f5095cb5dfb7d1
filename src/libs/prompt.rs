//! Interactive input for the tracking flow.
//!
//! The flow never talks to the terminal directly; it asks a [`Prompter`].
//! [`TerminalPrompter`] is the real implementation built on `dialoguer`,
//! tests supply scripted answers instead.

use crate::libs::error::LpError;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use std::io::ErrorKind;

/// Source of the three answers the flow may need from the user.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    /// New API token, asked for when none is cached.
    async fn ask_token(&self) -> Result<String>;

    /// Activity to book against when the member has no default.
    async fn ask_activity_id(&self) -> Result<u64>;

    /// Raw hours input; validation is left to the caller.
    async fn ask_hours(&self) -> Result<String>;
}

/// `dialoguer` prompts run on tokio's blocking pool so a CTRL+C listener on
/// the runtime stays responsive while the user types.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    async fn ask_token(&self) -> Result<String> {
        blocking(|| {
            Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptToken.to_string())
                .interact()
        })
        .await
    }

    async fn ask_activity_id(&self) -> Result<u64> {
        blocking(|| {
            Input::<u64>::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptActivityId.to_string())
                .interact_text()
        })
        .await
    }

    async fn ask_hours(&self) -> Result<String> {
        blocking(|| {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHours.to_string())
                .allow_empty(true)
                .interact_text()
        })
        .await
    }
}

async fn blocking<T, F>(prompt: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> dialoguer::Result<T> + Send + 'static,
{
    let answer = tokio::task::spawn_blocking(prompt).await.context("prompt task failed")?;
    answer.map_err(|err| match err {
        dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => LpError::Interrupted.into(),
        other => anyhow::anyhow!(Message::PromptFailed(other.to_string())),
    })
}
