//! Runtime configuration for lp-time.
//!
//! Settings come from the environment, optionally seeded from a `.env` file
//! in the working directory:
//!
//! - **`LP_TIME_API_URL`**: REST API base URL
//! - **`LP_TIME_SPACE_URL`**: Browsable web UI base URL, used for task links
//! - **`LP_TIME_HOME`**: Directory holding the cached API token
//!
//! Every setting has a default, so a bare invocation talks to the public
//! LiquidPlanner service and keeps its token in `~/.lp-time`.
//!
//! ```rust,no_run
//! use lp_time::libs::config::Config;
//!
//! let config = Config::from_env();
//! println!("Token stored in {}", config.data_dir.display());
//! ```

use std::env::var;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://app.liquidplanner.com/api";
pub const DEFAULT_SPACE_URL: &str = "https://app.liquidplanner.com/space";
pub const DATA_DIR_NAME: &str = ".lp-time";

pub const API_URL_VAR: &str = "LP_TIME_API_URL";
pub const SPACE_URL_VAR: &str = "LP_TIME_SPACE_URL";
pub const HOME_VAR: &str = "LP_TIME_HOME";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL every API path is appended to
    pub api_url: String,
    /// Base URL for human-facing task links
    pub space_url: String,
    /// Directory that holds the `auth-token` file
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(api_url: &str, space_url: &str, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            space_url: space_url.trim_end_matches('/').to_string(),
            data_dir: data_dir.into(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// A `.env` file is loaded first when present; variables already set in
    /// the environment win over it.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let api_url = non_empty_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let space_url = non_empty_var(SPACE_URL_VAR).unwrap_or_else(|| DEFAULT_SPACE_URL.to_string());
        let data_dir = non_empty_var(HOME_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self::new(&api_url, &space_url, data_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_SPACE_URL, default_data_dir())
    }
}

/// `<home>/.lp-time`, where home is `HOME`, then `USERPROFILE`, then `.`.
pub fn default_data_dir() -> PathBuf {
    let home = non_empty_var("HOME")
        .or_else(|| non_empty_var("USERPROFILE"))
        .unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(DATA_DIR_NAME)
}

fn non_empty_var(name: &str) -> Option<String> {
    var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let config = Config::new("http://localhost:8080/api/", "http://localhost:8080/space//", "/tmp/lp");
        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(config.space_url, "http://localhost:8080/space");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/lp"));
    }

    #[test]
    fn default_points_at_public_service() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.space_url, DEFAULT_SPACE_URL);
        assert!(config.data_dir.ends_with(DATA_DIR_NAME));
    }
}
