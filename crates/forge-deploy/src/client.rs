//! Two-call hosting deploy client
//!
//! `POST {api}/sites` creates a named site, then
//! `POST {api}/sites/{id}/deploys` uploads the archive. No retries; the first
//! failure ends the attempt. A site whose upload fails is left in place and
//! logged as orphaned.

use crate::config::HostingConfig;
use crate::error::{DeployError, DeployStage};
use crate::outcome::{DeployOutcome, SkipReason};
use crate::package::package_site;
use forge_artifact::Artifact;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// Longest provider body excerpt carried in an error message
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct SiteReply {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeployReply {
    #[serde(default)]
    ssl_url: Option<String>,
}

/// Hosting provider client
#[derive(Debug, Clone)]
pub struct DeployClient {
    client: Client,
    api_base: String,
    token: Option<String>,
    enabled: bool,
    site_prefix: String,
}

impl DeployClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns [`DeployError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &HostingConfig) -> Result<Self, DeployError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(DeployError::Client)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token().map(str::to_string),
            enabled: config.enabled,
            site_prefix: config.site_prefix.clone(),
        })
    }

    /// Whether a deploy would reach the network
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.token.is_some()
    }

    /// Publish `artifact`; never fails, always returns one outcome
    pub async fn deploy(&self, app_name: &str, artifact: &Artifact) -> DeployOutcome {
        if !self.enabled {
            return DeployOutcome::Skipped {
                reason: SkipReason::Disabled,
            };
        }
        let Some(token) = self.token.as_deref() else {
            return DeployOutcome::Skipped {
                reason: SkipReason::NoCredential,
            };
        };

        let name = site_name(&self.site_prefix, app_name, chrono::Utc::now().timestamp());
        match self.publish(token, &name, artifact).await {
            Ok((url, site_id)) => {
                info!(
                    site = %name,
                    site_id = %site_id,
                    url = %url,
                    digest = %artifact.digest().short(),
                    "Deployed site"
                );
                DeployOutcome::Deployed { url, site_id }
            }
            Err(err) => {
                warn!(site = %name, error = %err, "Deploy failed");
                DeployOutcome::Error {
                    message: err.to_string(),
                }
            }
        }
    }

    async fn publish(
        &self,
        token: &str,
        name: &str,
        artifact: &Artifact,
    ) -> Result<(String, String), DeployError> {
        let archive = package_site(artifact.html())?;

        let response = self
            .client
            .post(format!("{}/sites", self.api_base))
            .bearer_auth(token)
            .json(&json!({ "name": name }))
            .send()
            .await
            .map_err(|e| DeployError::transport(DeployStage::CreateSite, e))?;
        let site: SiteReply = decode(response, DeployStage::CreateSite).await?;

        let site_id = site
            .id
            .filter(|id| !id.is_empty())
            .ok_or(DeployError::MissingSiteId)?;
        let site_url = site.url.unwrap_or_default();

        let uploaded = self.upload(token, &site_id, archive).await;
        let deploy = match uploaded {
            Ok(deploy) => deploy,
            Err(err) => {
                warn!(
                    site = %name,
                    site_id = %site_id,
                    "Orphan site: created but content upload failed"
                );
                return Err(err);
            }
        };

        let url = deploy
            .ssl_url
            .filter(|url| !url.is_empty())
            .unwrap_or(site_url);
        Ok((url, site_id))
    }

    async fn upload(
        &self,
        token: &str,
        site_id: &str,
        archive: Vec<u8>,
    ) -> Result<DeployReply, DeployError> {
        let response = self
            .client
            .post(format!("{}/sites/{site_id}/deploys", self.api_base))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/zip")
            .body(archive)
            .send()
            .await
            .map_err(|e| DeployError::transport(DeployStage::Upload, e))?;
        decode(response, DeployStage::Upload).await
    }
}

/// Check the status, then decode the JSON body
async fn decode<T: serde::de::DeserializeOwned>(
    response: Response,
    stage: DeployStage,
) -> Result<T, DeployError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DeployError::Rejected {
            stage,
            status: status.as_u16(),
            excerpt: excerpt(&body, EXCERPT_CHARS),
        });
    }
    response
        .json()
        .await
        .map_err(|e| DeployError::transport(stage, e))
}

/// Unique site name: `<prefix>-<app name>-<unix seconds>`
///
/// The app name is lower-cased and every character outside `[a-z0-9-]`
/// becomes `-`.
#[must_use]
pub fn site_name(prefix: &str, app_name: &str, unix_secs: i64) -> String {
    let slug: String = app_name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{prefix}-{slug}-{unix_secs}")
}

/// First `max` characters of `body`
#[must_use]
pub fn excerpt(body: &str, max: usize) -> String {
    body.chars().take(max).collect()
}
