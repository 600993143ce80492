use std::time::Duration;

use clap::Args;
use fi_core::{Error, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_USER: &str = "user1";

pub const API_URL_VAR: &str = "FLIPIT_API_URL";
pub const API_TIMEOUT_VAR: &str = "FLIPIT_API_TIMEOUT_SECS";
pub const USER_VAR: &str = "FLIPIT_USER";

/// Where the prediction service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Option<Duration>,
    pub user_id: String,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{} cannot be used as a base URL", base_url)));
        }
        Ok(Self {
            base_url,
            timeout: None,
            user_id: DEFAULT_USER.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&url)?;

        if let Some(secs) = lookup(API_TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                Error::External(anyhow::anyhow!("Invalid {}={:?}: {}", API_TIMEOUT_VAR, secs, e))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(user) = lookup(USER_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_user(user);
        }
        Ok(config)
    }
}

/// Client settings an embedding binary can flatten into its own parser.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Base URL of the prediction service
    #[arg(long = "api-url", env = API_URL_VAR, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long = "api-timeout", env = API_TIMEOUT_VAR)]
    pub api_timeout: Option<u64>,

    /// User whose recommendations are fetched
    #[arg(long, env = USER_VAR, default_value = DEFAULT_USER)]
    pub user: String,
}

impl ClientArgs {
    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::new(&self.api_url)?.with_user(self.user);
        if let Some(secs) = self.api_timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
