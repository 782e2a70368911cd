//! Deploy outcome taxonomy

use serde::Serialize;
use std::fmt;

/// Why publishing was not attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No hosting token configured
    NoCredential,
    /// Publishing switched off in configuration
    Disabled,
}

impl SkipReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoCredential => "no credential",
            Self::Disabled => "disabled",
        }
    }

    /// Human-readable message for responses
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoCredential => "No NETLIFY_TOKEN configured - deployment skipped",
            Self::Disabled => "Deployment disabled by configuration",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one publish attempt; always exactly one of three
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeployOutcome {
    Deployed { url: String, site_id: String },
    Skipped { reason: SkipReason },
    Error { message: String },
}

impl DeployOutcome {
    #[inline]
    #[must_use]
    pub fn is_deployed(&self) -> bool {
        matches!(self, Self::Deployed { .. })
    }

    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        match self {
            Self::Deployed { url, .. } => Some(url),
            _ => None,
        }
    }

    #[must_use]
    pub fn site_id(&self) -> Option<&str> {
        match self {
            Self::Deployed { site_id, .. } => Some(site_id),
            _ => None,
        }
    }

    /// Skip reason or error text
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Deployed { .. } => None,
            Self::Skipped { reason } => Some(reason.message()),
            Self::Error { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors() {
        let deployed = DeployOutcome::Deployed {
            url: "https://a.netlify.app".into(),
            site_id: "s1".into(),
        };
        assert!(deployed.is_deployed());
        assert_eq!(deployed.live_url(), Some("https://a.netlify.app"));
        assert_eq!(deployed.message(), None);

        let skipped = DeployOutcome::Skipped {
            reason: SkipReason::NoCredential,
        };
        assert_eq!(skipped.live_url(), None);
        assert!(skipped.message().unwrap().contains("NETLIFY_TOKEN"));
    }

    #[test]
    fn serializes_tagged() {
        let outcome = DeployOutcome::Skipped {
            reason: SkipReason::Disabled,
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "status": "skipped", "reason": "disabled" })
        );
    }
}
