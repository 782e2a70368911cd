//! Hosting provider settings

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.netlify.com/api/v1";
pub const DEFAULT_SITE_PREFIX: &str = "promptforge";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the deploy client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Publishing switch; `false` skips even with a token
    pub enabled: bool,
    pub token: Option<String>,
    pub api_base: String,
    pub site_prefix: String,
    /// Per-call timeout
    pub timeout_secs: u64,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            site_prefix: DEFAULT_SITE_PREFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HostingConfig {
    /// Token, if set and not blank
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
