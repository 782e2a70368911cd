//! Error types for the pipeline
//!
//! Only two failures reach a caller once the pipeline is built: an idea that
//! is too short and a required generative backend that is not configured.
//! The rest are startup errors.

use forge_deploy::DeployError;
use forge_generate::GenerateError;
use forge_template::TemplateError;
use std::path::PathBuf;

/// Main pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// Idea rejected before entering the pipeline
    #[error("Idea must be at least {min_chars} characters")]
    Validation { min_chars: usize, actual: usize },

    /// Generation was the only path and no backend is configured
    #[error("No template match found. Enable AI by setting OPENAI_API_KEY environment variable.")]
    GenerativeUnavailable,

    /// Template catalog could not be built
    #[error("template catalog error: {0}")]
    Template(#[from] TemplateError),

    /// Generative client could not be built
    #[error("generative backend error: {0}")]
    Generate(GenerateError),

    /// Deploy client could not be built
    #[error("deploy client error: {0}")]
    Deploy(#[from] DeployError),

    /// Configuration file or environment value is invalid
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ForgeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the caller is at fault
    #[inline]
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::GenerativeUnavailable)
    }

    /// HTTP status for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

impl From<GenerateError> for ForgeError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Unavailable => Self::GenerativeUnavailable,
            other => Self::Generate(other),
        }
    }
}
