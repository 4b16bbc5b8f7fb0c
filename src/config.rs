//! Client configuration
//!
//! There is no config file; hosts either build a [`FetchConfig`] directly,
//! deserialize it from their own settings, or read it from the environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT, ENV_ACCEPT_INVALID_CERTS, ENV_MAX_REDIRECTS,
    ENV_USER_AGENT,
};

/// Settings for the shared HTTP client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    /// When true, ignores TLS certificate errors (useful for testing environments)
    pub accept_invalid_certs: bool,
    /// 0 disables following redirects
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with `FETCH_BRIDGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each known key
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = FetchConfig::default();

        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = agent;
        }
        if let Some(raw) = lookup(ENV_ACCEPT_INVALID_CERTS) {
            config.accept_invalid_certs = parse_flag(&raw)
                .with_context(|| format!("invalid {}={:?}", ENV_ACCEPT_INVALID_CERTS, raw))?;
        }
        if let Some(raw) = lookup(ENV_MAX_REDIRECTS) {
            config.max_redirects = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {}={:?}", ENV_MAX_REDIRECTS, raw))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}
