//! Run configuration
//!
//! Both credentials are resolved once at startup; the rest of the crate
//! never touches the environment.

use crate::error::{Error, Result};
use std::env;
use std::fmt;

/// Credentials for the two external services
///
/// Tokens are secrets: `Debug` redacts them and nothing in this crate logs
/// them.
#[derive(Clone)]
pub struct Config {
    /// GitHub API token
    pub gh_token: String,
    /// Story tracker API token
    pub tracker_token: String,
    /// Custom GitHub host (GitHub Enterprise), None for github.com
    pub gh_host: Option<String>,
}

impl Config {
    /// Build configuration from the process environment
    ///
    /// Priority per token:
    /// 1. the Actions input (`INPUT_GHTOKEN` / `INPUT_CHTOKEN`)
    /// 2. the conventional variable (`GITHUB_TOKEN` / `CLUBHOUSE_TOKEN`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gh_token = get("INPUT_GHTOKEN")
            .or_else(|| get("GITHUB_TOKEN"))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config("input ghToken is required".to_string()))?;

        let tracker_token = get("INPUT_CHTOKEN")
            .or_else(|| get("CLUBHOUSE_TOKEN"))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config("input chToken is required".to_string()))?;

        Ok(Self {
            gh_token,
            tracker_token,
            gh_host: get("GH_HOST").filter(|h| !h.is_empty()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gh_token", &"***")
            .field("tracker_token", &"***")
            .field("gh_host", &self.gh_host)
            .finish()
    }
}
