//! Error types for the deploy client
//!
//! These never leave the crate as errors: [`crate::DeployClient::deploy`]
//! folds them into [`crate::DeployOutcome::Error`].

use std::fmt;

/// Step of the publish protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStage {
    CreateSite,
    Upload,
}

impl fmt::Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateSite => f.write_str("Failed to create site"),
            Self::Upload => f.write_str("Deployment failed"),
        }
    }
}

/// Deploy failures
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Archive could not be written
    #[error("packaging failed: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error("packaging failed: {0}")]
    Io(#[from] std::io::Error),

    /// Connect, timeout or undecodable reply
    #[error("{stage}: {source}")]
    Transport {
        stage: DeployStage,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx reply, carrying a bounded excerpt of the body
    #[error("{stage}: {excerpt}")]
    Rejected {
        stage: DeployStage,
        status: u16,
        excerpt: String,
    },

    /// Create-site reply without a site id
    #[error("Failed to create site: reply carried no site id")]
    MissingSiteId,

    /// HTTP client could not be built
    #[error("http client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}

impl DeployError {
    pub fn transport(stage: DeployStage, source: reqwest::Error) -> Self {
        Self::Transport { stage, source }
    }

    /// Stage the failure happened in, if it reached the network
    #[must_use]
    pub fn stage(&self) -> Option<DeployStage> {
        match self {
            Self::Transport { stage, .. } | Self::Rejected { stage, .. } => Some(*stage),
            Self::MissingSiteId => Some(DeployStage::CreateSite),
            Self::Package(_) | Self::Io(_) | Self::Client(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_names_stage() {
        let err = DeployError::Rejected {
            stage: DeployStage::Upload,
            status: 422,
            excerpt: "bad zip".into(),
        };
        assert_eq!(err.to_string(), "Deployment failed: bad zip");
        assert_eq!(err.stage(), Some(DeployStage::Upload));
    }
}
