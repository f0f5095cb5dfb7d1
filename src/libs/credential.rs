//! Cached LiquidPlanner API token.
//!
//! The token is kept as plaintext in `<data dir>/auth-token`. Surrounding
//! whitespace is dropped both when saving and when reading, so the file, the
//! returned [`Credential`] and later loads all carry the same value.

use super::data_storage::DataStorage;
use super::error::LpError;
use super::messages::Message;
use super::prompt::Prompter;
use crate::{msg_debug, msg_info, msg_warning};
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the cached API token inside the data directory.
pub const TOKEN_FILE: &str = "auth-token";

/// API token together with the file it is cached in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    token: String,
    path: PathBuf,
}

impl Credential {
    pub fn new(token: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            token: token.into(),
            path: path.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// File the token was read from or saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Plaintext API token cached on disk.
#[derive(Clone, Debug)]
pub struct CredentialStore {
    storage: DataStorage,
    token_file_path: PathBuf,
}

impl CredentialStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let storage = DataStorage::new(data_dir);
        let token_file_path = storage.get_path(TOKEN_FILE);
        Self { storage, token_file_path }
    }

    pub fn path(&self) -> &Path {
        &self.token_file_path
    }

    /// Returns the cached token, asking for a new one when it can't be read.
    ///
    /// A token that exists but is rejected by the server is not repaired
    /// here; that surfaces later as an authentication failure.
    pub async fn load<P: Prompter>(&self, prompter: &P) -> Result<Credential> {
        match self.read() {
            Ok(token) => Ok(Credential::new(token, &self.token_file_path)),
            Err(err) => {
                msg_debug!(err);
                msg_warning!(Message::TokenMissing, true);
                let token = prompter.ask_token().await?;
                self.save(&token)
            }
        }
    }

    /// Writes the trimmed `token` as the whole file content.
    pub fn save(&self, token: &str) -> Result<Credential> {
        let token = token.trim();
        self.storage.ensure_dir();

        let mut file = File::create(&self.token_file_path)?;
        file.write_all(token.as_bytes())?;

        msg_info!(Message::TokenSaved(self.token_file_path.display().to_string()));
        Ok(Credential::new(token, &self.token_file_path))
    }

    fn read(&self) -> Result<String, LpError> {
        fs::read_to_string(&self.token_file_path)
            .map(|token| token.trim().to_string())
            .map_err(|_| LpError::CredentialMissing(self.token_file_path.clone()))
    }
}
