//! Generation with graceful degradation
//!
//! A configured backend always yields a bundle: transport failures, non-2xx
//! replies and malformed payloads are logged and replaced by the default
//! template. Only a missing backend is reported to the caller.

use crate::client::{GenerativeBackend, OpenAiClient};
use crate::config::GenerativeConfig;
use crate::error::GenerateError;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::reply::parse_reply;
use forge_artifact::{derive_app_name, Bundle, BundleOrigin};
use forge_template::{TemplateStore, DEFAULT_TEMPLATE_ID};
use std::sync::Arc;
use tracing::{info, warn};

/// Generative fallback over an optional backend
#[derive(Clone)]
pub struct Generator {
    backend: Option<Arc<dyn GenerativeBackend>>,
    store: Arc<TemplateStore>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("backend", &self.backend.is_some())
            .field("templates", &self.store.len())
            .finish()
    }
}

impl Generator {
    /// Generator with an explicit backend (or none)
    #[must_use]
    pub fn new(backend: Option<Arc<dyn GenerativeBackend>>, store: Arc<TemplateStore>) -> Self {
        Self { backend, store }
    }

    /// Generator backed by [`OpenAiClient`] when `config` carries a key
    ///
    /// # Errors
    /// Returns [`GenerateError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(
        config: &GenerativeConfig,
        store: Arc<TemplateStore>,
    ) -> Result<Self, GenerateError> {
        let backend: Option<Arc<dyn GenerativeBackend>> = if config.is_configured() {
            Some(Arc::new(OpenAiClient::new(config)?))
        } else {
            None
        };
        Ok(Self::new(backend, store))
    }

    /// Whether a backend is configured
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Request a bundle for `idea`
    ///
    /// # Errors
    /// Returns [`GenerateError::Unavailable`] if no backend is configured.
    /// Every backend or reply failure is absorbed into the fallback bundle.
    pub async fn generate(&self, idea: &str) -> Result<Bundle, GenerateError> {
        let backend = self.backend.as_ref().ok_or(GenerateError::Unavailable)?;

        let prompt = build_prompt(idea);
        let outcome = match backend.complete(SYSTEM_PROMPT, &prompt).await {
            Ok(reply) => parse_reply(&reply),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(bundle) => {
                info!(app = %bundle.app_name, "Generated bundle");
                Ok(bundle)
            }
            Err(err) => {
                warn!(error = %err, "Generative reply unusable, substituting default bundle");
                Ok(self.fallback(idea))
            }
        }
    }

    /// Default template under a name derived from the idea
    #[must_use]
    pub fn fallback(&self, idea: &str) -> Bundle {
        let app_name = derive_app_name(idea, Some(DEFAULT_TEMPLATE_ID));
        let bundle = match self.store.get(DEFAULT_TEMPLATE_ID) {
            Some(record) => Bundle::from_template(&record, app_name),
            None => Bundle::hard_default(app_name),
        };
        bundle.with_origin(BundleOrigin::Fallback)
    }
}
