//! Error types for the generative fallback

/// Generative backend failures
///
/// Only [`GenerateError::Unavailable`] ever reaches the pipeline; every other
/// variant is absorbed by [`crate::Generator`] into the fallback bundle.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// No backend configured
    #[error("generative backend is not configured (set OPENAI_API_KEY)")]
    Unavailable,

    /// Connect, timeout or body decoding failure
    #[error("generative request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx reply
    #[error("generative backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Reply could not be turned into a bundle
    #[error("malformed generative reply: {0}")]
    Malformed(String),

    /// Reply carried no content
    #[error("generative backend returned an empty reply")]
    EmptyReply,
}

impl GenerateError {
    /// Create malformed-reply error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Whether this error means the backend was never configured
    #[inline]
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
