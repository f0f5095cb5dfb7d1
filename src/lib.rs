//! # lp-time - LiquidPlanner timesheet helper
//!
//! A command-line utility that finds the LiquidPlanner task named after the
//! current git branch and logs worked hours against it.
//!
//! ## Features
//!
//! - **Token Caching**: The API token is asked for once and stored under `~/.lp-time`
//! - **Branch Matching**: The current branch name is used as a fuzzy task query
//! - **Default Activity**: The member's default activity is used when configured
//! - **Testable Seams**: Transport, prompts and branch lookup are all injectable
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lp_time::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     std::process::exit(Cli::menu().await);
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
