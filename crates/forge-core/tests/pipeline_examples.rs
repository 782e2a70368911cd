//! End-to-end pipeline behavior with mocked providers

use async_trait::async_trait;
use forge_core::prelude::*;
use forge_generate::GenerateError;
use forge_test_utils::{
    builtin_pipeline, fenced_reply, generative_for, hosting_for, mount_completion,
    mount_create_site, mount_hosting_success, mount_upload, offline_config, ScriptedBackend,
    SECTIONED_FRONTEND, SSL_URL,
};
use mockall::mock;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use wiremock::MockServer;

mock! {
    pub Backend {}

    #[async_trait]
    impl GenerativeBackend for Backend {
        async fn complete(&self, system: &str, user: &str) -> Result<String, GenerateError>;
    }
}

const UNMATCHED_IDEA: &str = "a haiku composer for poets";

#[tokio::test]
async fn todo_idea_without_credential_is_code_only() {
    let pipeline = builtin_pipeline(offline_config(), None);
    let response = pipeline.run("I want a todo list app").await.unwrap();

    assert_eq!(response.template.as_deref(), Some("todo"));
    assert_eq!(response.app_name, "IWantA");
    assert_eq!(response.generation_source, GenerationSource::Template);
    assert_eq!(response.deployment_status, DeploymentStatus::CodeOnly);
    assert_eq!(response.live_url, None);
    assert!(response.frontend_code.contains("IWantA"));
    assert!(!response.frontend_code.contains("{APP_NAME}"));
    assert!(!response.backend_code.contains("{APP_NAME}"));
}

#[tokio::test]
async fn expense_idea_with_credential_is_deployed() {
    let server = MockServer::start().await;
    mount_hosting_success(&server).await;

    let config = offline_config().with_hosting(hosting_for(&server));
    let pipeline = builtin_pipeline(config, None);
    let response = pipeline.run("track my expenses").await.unwrap();

    assert_eq!(response.template.as_deref(), Some("expense"));
    assert_eq!(response.app_name, "TrackMyExpenses");
    assert_eq!(response.deployment_status, DeploymentStatus::Deployed);
    assert_eq!(response.live_url.as_deref(), Some(SSL_URL));
    assert!(response.site_id.is_some());
}

#[tokio::test]
async fn malformed_reply_uses_default_bundle_and_never_raises() {
    let mut backend = MockBackend::new();
    backend
        .expect_complete()
        .times(1)
        .returning(|_, _| Ok("This is not JSON at all.".to_string()));

    let backend: Arc<dyn GenerativeBackend> = Arc::new(backend);
    let pipeline = builtin_pipeline(offline_config(), Some(backend));
    let response = pipeline.run(UNMATCHED_IDEA).await.unwrap();

    assert_eq!(response.template.as_deref(), Some("fallback"));
    assert_eq!(response.app_name, "AHaikuComposer");
    assert_eq!(response.generation_source, GenerationSource::Ai);
    assert_eq!(response.deployment_status, DeploymentStatus::CodeOnly);
}

#[tokio::test]
async fn matched_idea_never_calls_backend() {
    let mut backend = MockBackend::new();
    backend.expect_complete().never();

    let backend: Arc<dyn GenerativeBackend> = Arc::new(backend);
    let pipeline = builtin_pipeline(offline_config(), Some(backend));
    let response = pipeline.run("weekly quiz for my class").await.unwrap();
    assert_eq!(response.template.as_deref(), Some("quiz"));
}

#[tokio::test]
async fn generated_bundle_keeps_its_own_name() {
    let backend = ScriptedBackend::replying(fenced_reply("PlantPal", SECTIONED_FRONTEND));
    let dyn_backend: Arc<dyn GenerativeBackend> = backend.clone();

    let pipeline = builtin_pipeline(offline_config(), Some(dyn_backend));
    let response = pipeline.run(UNMATCHED_IDEA).await.unwrap();

    assert_eq!(backend.calls(), 1);
    assert_eq!(response.app_name, "PlantPal");
    assert_eq!(response.template, None);
    assert_eq!(response.generation_source, GenerationSource::Ai);
    assert!(response.frontend_code.contains("\"name\": \"PlantPal\""));
}

#[tokio::test]
async fn generative_failure_is_absorbed() {
    let backend: Arc<dyn GenerativeBackend> = ScriptedBackend::failing(503);
    let pipeline = builtin_pipeline(offline_config(), Some(backend));
    let response = pipeline.run(UNMATCHED_IDEA).await.unwrap();
    assert_eq!(response.template.as_deref(), Some("fallback"));
}

#[tokio::test]
async fn unmatched_idea_without_backend_defaults_silently() {
    let pipeline = builtin_pipeline(offline_config(), None);
    let response = pipeline.run(UNMATCHED_IDEA).await.unwrap();
    assert_eq!(response.template.as_deref(), Some("todo"));
    assert_eq!(response.generation_source, GenerationSource::Template);
}

#[tokio::test]
async fn deployment_disabled_status() {
    let server = MockServer::start().await;
    mount_create_site(&server, 201, 0).await;

    let config = offline_config().with_hosting(hosting_for(&server).with_enabled(false));
    let pipeline = builtin_pipeline(config, None);
    let response = pipeline.run("I want a todo list app").await.unwrap();

    assert_eq!(response.deployment_status, DeploymentStatus::DeploymentDisabled);
    assert!(response.deployment_message.is_some());
}

#[tokio::test]
async fn rejected_upload_still_returns_code() {
    let server = MockServer::start().await;
    mount_create_site(&server, 201, 1).await;
    mount_upload(&server, 500, 1).await;

    let config = offline_config().with_hosting(hosting_for(&server));
    let pipeline = builtin_pipeline(config, None);
    let response = pipeline.run("track my expenses").await.unwrap();

    assert_eq!(response.deployment_status, DeploymentStatus::CodeOnly);
    assert_eq!(
        response.deployment_message.as_deref(),
        Some("Deployment failed: upload rejected")
    );
    assert!(!response.frontend_code.is_empty());
}

#[tokio::test]
async fn openai_endpoint_end_to_end() {
    let server = MockServer::start().await;
    mount_completion(&server, &fenced_reply("Sprout", SECTIONED_FRONTEND)).await;

    let config = offline_config().with_generative(generative_for(&server));
    let pipeline = Pipeline::new(config).unwrap();
    let response = pipeline.run(UNMATCHED_IDEA).await.unwrap();

    assert_eq!(response.app_name, "Sprout");
    assert_eq!(response.generation_source, GenerationSource::Ai);
}

#[tokio::test]
async fn short_idea_is_validation_error() {
    let pipeline = builtin_pipeline(offline_config(), None);
    let err = pipeline.run("   todo    ").await.unwrap_err();
    assert!(matches!(err, ForgeError::Validation { actual: 4, .. }));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn identical_requests_share_a_digest() {
    let pipeline = builtin_pipeline(offline_config(), None);
    let a = pipeline.run("I want a todo list app").await.unwrap();
    let b = pipeline.run("I want a todo list app").await.unwrap();
    assert_eq!(a.artifact_digest, b.artifact_digest);
}
