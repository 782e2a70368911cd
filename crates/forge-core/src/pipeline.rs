//! Pipeline orchestrator
//!
//! One independent, sequential run per request:
//! `Matching → {Templated, AiGenerating, Defaulting} → Assembling →
//! Deploying → Responding`. Shared state (catalog, index, configuration) is
//! read-only after construction.

use crate::config::ForgeConfig;
use crate::error::ForgeError;
use crate::types::{DeploymentStatus, GenerateResponse, GenerationSource};
use forge_artifact::{assemble, derive_app_name, Bundle};
use forge_deploy::DeployClient;
use forge_generate::{GenerativeBackend, Generator};
use forge_template::{
    KeywordIndex, MatchKind, MatchResult, TemplateMatcher, TemplateStore, DEFAULT_TEMPLATE_ID,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Orchestrator states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Matching,
    Templated,
    AiGenerating,
    Defaulting,
    Assembling,
    Deploying,
    Responding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Matching => "matching",
            Self::Templated => "templated",
            Self::AiGenerating => "ai_generating",
            Self::Defaulting => "defaulting",
            Self::Assembling => "assembling",
            Self::Deploying => "deploying",
            Self::Responding => "responding",
        };
        f.write_str(name)
    }
}

/// The idea-to-deployment pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Arc<ForgeConfig>,
    matcher: TemplateMatcher,
    generator: Generator,
    deployer: DeployClient,
}

impl Pipeline {
    /// Build from configuration: built-in catalog (overlaid by
    /// `templates_dir`), OpenAI client when keyed, hosting client.
    ///
    /// # Errors
    /// Fails on an unreadable or malformed template directory, or if an
    /// HTTP client cannot be built.
    pub fn new(config: ForgeConfig) -> Result<Self, ForgeError> {
        let mut store = TemplateStore::builtin()?;
        if let Some(dir) = &config.templates_dir {
            let overlay = TemplateStore::load_dir(dir)?;
            info!(dir = %dir.display(), templates = overlay.len(), "Loaded template overlay");
            store = store.overlay(overlay);
        }
        let store = Arc::new(store);
        let generator = Generator::from_config(&config.generative, store.clone())?;
        Self::assemble_parts(config, store, Arc::new(KeywordIndex::default()), generator)
    }

    /// Build from explicit parts
    ///
    /// # Errors
    /// Fails if the hosting HTTP client cannot be built.
    pub fn with_parts(
        config: ForgeConfig,
        store: Arc<TemplateStore>,
        index: Arc<KeywordIndex>,
        backend: Option<Arc<dyn GenerativeBackend>>,
    ) -> Result<Self, ForgeError> {
        let generator = Generator::new(backend, store.clone());
        Self::assemble_parts(config, store, index, generator)
    }

    fn assemble_parts(
        config: ForgeConfig,
        store: Arc<TemplateStore>,
        index: Arc<KeywordIndex>,
        generator: Generator,
    ) -> Result<Self, ForgeError> {
        let deployer = DeployClient::new(&config.hosting)?;
        info!(
            templates = store.len(),
            generative = generator.is_available(),
            deploy = deployer.is_active(),
            "Pipeline ready"
        );
        Ok(Self {
            config: Arc::new(config),
            matcher: TemplateMatcher::new(index, store),
            generator,
            deployer,
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Reject ideas shorter than the configured minimum
    ///
    /// # Errors
    /// Returns [`ForgeError::Validation`] with the trimmed length.
    pub fn validate<'a>(&self, idea: &'a str) -> Result<&'a str, ForgeError> {
        let trimmed = idea.trim();
        let actual = trimmed.chars().count();
        if actual < self.config.min_idea_chars {
            return Err(ForgeError::Validation {
                min_chars: self.config.min_idea_chars,
                actual,
            });
        }
        Ok(trimmed)
    }

    /// Run the whole pipeline for one idea
    ///
    /// # Errors
    /// Only [`ForgeError::Validation`] and [`ForgeError::GenerativeUnavailable`];
    /// every other failure degrades into the response.
    pub async fn run(&self, idea: &str) -> Result<GenerateResponse, ForgeError> {
        let idea = self.validate(idea)?;
        let span = info_span!("pipeline", idea_chars = idea.chars().count());
        self.run_validated(idea).instrument(span).await
    }

    async fn run_validated(&self, idea: &str) -> Result<GenerateResponse, ForgeError> {
        let (bundle, app_name) = self.resolve(idea).await?;

        debug!(stage = %Stage::Assembling, app = %app_name);
        let assembly = assemble(bundle, &app_name);

        debug!(stage = %Stage::Deploying, digest = %assembly.artifact.digest().short());
        let outcome = self.deployer.deploy(&app_name, &assembly.artifact).await;

        debug!(stage = %Stage::Responding, outcome = ?outcome);
        let bundle = assembly.bundle;
        let status = DeploymentStatus::from(&outcome);
        info!(app = %app_name, status = ?status, template = ?bundle.origin.identity(), "Request complete");

        Ok(GenerateResponse {
            generation_source: GenerationSource::from(&bundle.origin),
            template: bundle.origin.identity().map(str::to_string),
            app_name,
            idea: idea.to_string(),
            frontend_code: bundle.frontend_code,
            backend_code: bundle.backend_code,
            database_schema: bundle.database_schema,
            deploy_instructions: bundle.deploy_instructions,
            live_url: outcome.live_url().map(str::to_string),
            site_id: outcome.site_id().map(str::to_string),
            deployment_status: status,
            deployment_message: outcome.message().map(str::to_string),
            artifact_digest: assembly.artifact.digest(),
        })
    }

    /// Matching, then one of templated, generated or default
    async fn resolve(&self, idea: &str) -> Result<(Bundle, String), ForgeError> {
        debug!(stage = %Stage::Matching);
        match self.matcher.match_idea(idea) {
            MatchResult::Matched { record, kind } => {
                debug!(stage = %Stage::Templated, template = %record.id());
                match &kind {
                    MatchKind::Exact { phrase } => {
                        info!(template = %record.id(), phrase = %phrase, "Exact template match");
                    }
                    MatchKind::Fuzzy { phrase, score } => {
                        info!(template = %record.id(), phrase = %phrase, score, "Fuzzy template match");
                    }
                }
                let app_name = derive_app_name(idea, Some(record.id()));
                Ok((Bundle::from_template(&record, app_name.clone()), app_name))
            }
            MatchResult::NoMatch { best_score } if self.generator.is_available() => {
                debug!(stage = %Stage::AiGenerating, best_score);
                let bundle = self.generator.generate(idea).await?;
                let app_name = bundle.app_name.clone();
                Ok((bundle, app_name))
            }
            MatchResult::NoMatch { best_score } => {
                debug!(stage = %Stage::Defaulting, best_score);
                let store = self.matcher.store();
                let (bundle, app_name) = match store.get(DEFAULT_TEMPLATE_ID) {
                    Some(record) => {
                        let app_name = derive_app_name(idea, Some(DEFAULT_TEMPLATE_ID));
                        (Bundle::from_template(&record, app_name.clone()), app_name)
                    }
                    None => {
                        let app_name = derive_app_name(idea, None);
                        (Bundle::hard_default(app_name.clone()), app_name)
                    }
                };
                warn!(
                    best_score,
                    template = ?bundle.origin.identity(),
                    "No template match, using default bundle"
                );
                Ok((bundle, app_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(config: ForgeConfig) -> Pipeline {
        Pipeline::with_parts(
            config,
            Arc::new(TemplateStore::builtin().unwrap()),
            Arc::new(KeywordIndex::default()),
            None,
        )
        .unwrap()
    }

    #[test]
    fn validation_counts_trimmed_chars() {
        let p = pipeline(ForgeConfig::new());
        assert!(matches!(
            p.validate("   short   "),
            Err(ForgeError::Validation { actual: 5, .. })
        ));
        assert_eq!(p.validate("  ten chars!  ").unwrap(), "ten chars!");
    }

    #[tokio::test]
    async fn short_idea_rejected_before_pipeline() {
        let p = pipeline(ForgeConfig::new());
        let err = p.run("todo").await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn default_path_without_backend() {
        let p = pipeline(ForgeConfig::new());
        let response = p.run("zzzz qqqq xxxx").await.unwrap();
        assert_eq!(response.template.as_deref(), Some("todo"));
        assert_eq!(response.generation_source, GenerationSource::Template);
        assert_eq!(response.app_name, "ZzzzQqqqXxxx");
    }

    #[tokio::test]
    async fn hard_default_when_catalog_lacks_default_template() {
        let p = Pipeline::with_parts(
            ForgeConfig::new(),
            Arc::new(TemplateStore::new()),
            Arc::new(KeywordIndex::default()),
            None,
        )
        .unwrap();
        let response = p.run("zzzz qqqq xxxx").await.unwrap();
        assert_eq!(response.template.as_deref(), Some("default"));
        assert!(response.frontend_code.contains("ZzzzQqqqXxxx"));
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::AiGenerating.to_string(), "ai_generating");
        assert_eq!(Stage::Responding.to_string(), "responding");
    }
}
