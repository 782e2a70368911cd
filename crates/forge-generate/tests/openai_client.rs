//! OpenAI-compatible client against a mock server

use forge_generate::{GenerateError, GenerativeBackend, GenerativeConfig, Generator, OpenAiClient};
use forge_template::TemplateStore;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GenerativeConfig {
    GenerativeConfig::default()
        .with_api_key("sk-test")
        .with_base_url(format!("{}/v1", server.uri()))
        .with_timeout_secs(5)
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn sends_chat_completion_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "max_tokens": 4000,
            "messages": [{ "role": "system" }, { "role": "user" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&config_for(&server)).unwrap();
    let reply = client.complete("system", "user").await.unwrap();
    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&config_for(&server)).unwrap();
    let err = client.complete("s", "u").await.unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Status { status: 429, ref body } if body == "rate limited"
    ));
}

#[tokio::test]
async fn empty_choices_are_an_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&config_for(&server)).unwrap();
    let err = client.complete("s", "u").await.unwrap_err();
    assert!(matches!(err, GenerateError::EmptyReply));
}

#[tokio::test]
async fn generator_uses_fenced_reply() {
    let server = MockServer::start().await;
    let payload = json!({
        "app_name": "PlantPal",
        "frontend_code": "===== src/App.jsx =====\nfunction App() { return null; }\n",
        "backend_code": "app = FastAPI()",
        "database_schema": "",
        "deploy_instructions": ""
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(&format!("Sure!\n```json\n{payload}\n```"))),
        )
        .mount(&server)
        .await;

    let store = Arc::new(TemplateStore::builtin().unwrap());
    let generator = Generator::from_config(&config_for(&server), store).unwrap();
    let bundle = generator.generate("a plant watering tracker").await.unwrap();
    assert_eq!(bundle.app_name, "PlantPal");
    assert_eq!(bundle.backend_code, "app = FastAPI()");
}

#[tokio::test]
async fn generator_absorbs_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = Arc::new(TemplateStore::builtin().unwrap());
    let generator = Generator::from_config(&config_for(&server), store).unwrap();
    let bundle = generator.generate("a plant watering tracker").await.unwrap();
    assert_eq!(bundle.origin.identity(), Some("fallback"));
    assert_eq!(bundle.app_name, "APlantWatering");
}
