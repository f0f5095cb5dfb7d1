//! Core library modules for lp-time.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, errors
//! - **Credentials**: Plaintext token cache with interactive first-run setup
//! - **Environment**: Git branch lookup and terminal prompts
//! - **User Interface**: Console tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lp_time::libs::config::Config;
//! use lp_time::libs::credential::CredentialStore;
//!
//! let config = Config::from_env();
//! let store = CredentialStore::new(&config.data_dir);
//! println!("Token file: {}", store.path().display());
//! ```

pub mod branch;
pub mod config;
pub mod credential;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod prompt;
pub mod view;
