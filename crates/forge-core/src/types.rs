//! Request and response shapes

use forge_artifact::{ArtifactDigest, BundleOrigin};
use forge_deploy::{DeployOutcome, SkipReason};
use serde::{Deserialize, Serialize};

/// Inbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub idea: String,
}

impl GenerateRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self { idea: idea.into() }
    }
}

/// Which path produced the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    Template,
    Ai,
}

impl From<&BundleOrigin> for GenerationSource {
    fn from(origin: &BundleOrigin) -> Self {
        if origin.is_generative() {
            Self::Ai
        } else {
            Self::Template
        }
    }
}

/// Deployment status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Deployed,
    DeploymentDisabled,
    CodeOnly,
}

impl From<&DeployOutcome> for DeploymentStatus {
    fn from(outcome: &DeployOutcome) -> Self {
        match outcome {
            DeployOutcome::Deployed { .. } => Self::Deployed,
            DeployOutcome::Skipped {
                reason: SkipReason::Disabled,
            } => Self::DeploymentDisabled,
            DeployOutcome::Skipped {
                reason: SkipReason::NoCredential,
            }
            | DeployOutcome::Error { .. } => Self::CodeOnly,
        }
    }
}

/// Outbound payload
///
/// Source fields carry the app name already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub app_name: String,
    pub idea: String,
    pub frontend_code: String,
    pub backend_code: String,
    pub database_schema: String,
    pub deploy_instructions: String,
    pub live_url: Option<String>,
    pub site_id: Option<String>,
    pub deployment_status: DeploymentStatus,
    pub deployment_message: Option<String>,
    pub generation_source: GenerationSource,
    /// Matched template identity; `fallback` for a replaced generative reply
    pub template: Option<String>,
    pub artifact_digest: ArtifactDigest,
}
