//! Testing utilities for the PromptForge workspace
//!
//! Shared fixtures, a scripted generative backend and mock-server helpers
//! for the generative and hosting APIs.

#![allow(missing_docs)]

use async_trait::async_trait;
use forge_core::{ForgeConfig, Pipeline};
use forge_deploy::HostingConfig;
use forge_generate::{GenerateError, GenerativeBackend, GenerativeConfig};
use forge_template::{KeywordIndex, TemplateStore};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HOSTING_TOKEN: &str = "nf-test-token";
pub const OPENAI_KEY: &str = "sk-test";
pub const SITE_ID: &str = "site-123";
pub const SITE_URL: &str = "http://promptforge-test.netlify.app";
pub const SSL_URL: &str = "https://promptforge-test.netlify.app";

/// Frontend with component and stylesheet sections
pub const SECTIONED_FRONTEND: &str = "\
===== package.json =====
{ \"name\": \"{APP_NAME}\" }
===== src/App.jsx =====
import React, { useState } from 'react';
import './index.css';

function App() {
  const [count, setCount] = useState(0);
  return <button onClick={() => setCount(count + 1)}>{APP_NAME} {count}</button>;
}

export default App;
===== src/index.css =====
button { font-size: 18px; }
";

/// Frontend with no sentinel markers at all
pub const PLAIN_FRONTEND: &str = "\
function App() {
  return <p>plain</p>;
}
";

/// Generative reply text wrapping a complete payload in a json fence
#[must_use]
pub fn fenced_reply(app_name: &str, frontend: &str) -> String {
    let payload = json!({
        "app_name": app_name,
        "frontend_code": frontend,
        "backend_code": "from fastapi import FastAPI\napp = FastAPI()\n",
        "database_schema": "create table items (id serial primary key);\n",
        "deploy_instructions": "1. netlify deploy\n",
    });
    format!("Here is your app:\n```json\n{payload:#}\n```\n")
}

/// Configuration with neither generative key nor hosting token
#[must_use]
pub fn offline_config() -> ForgeConfig {
    ForgeConfig::new()
}

#[must_use]
pub fn generative_for(server: &MockServer) -> GenerativeConfig {
    GenerativeConfig::default()
        .with_api_key(OPENAI_KEY)
        .with_base_url(format!("{}/v1", server.uri()))
        .with_timeout_secs(5)
}

#[must_use]
pub fn hosting_for(server: &MockServer) -> HostingConfig {
    HostingConfig::default()
        .with_token(HOSTING_TOKEN)
        .with_api_base(format!("{}/api/v1", server.uri()))
        .with_timeout_secs(5)
}

/// Pipeline over the built-in catalog with an optional scripted backend
///
/// # Panics
/// Panics if the built-in catalog or an HTTP client cannot be built.
#[must_use]
pub fn builtin_pipeline(
    config: ForgeConfig,
    backend: Option<Arc<dyn GenerativeBackend>>,
) -> Pipeline {
    let store = Arc::new(TemplateStore::builtin().expect("built-in catalog"));
    Pipeline::with_parts(config, store, Arc::new(KeywordIndex::default()), backend)
        .expect("pipeline")
}

/// Generative backend replaying a fixed answer
#[derive(Debug)]
pub struct ScriptedBackend {
    reply: Result<String, u16>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    /// Always answer `text`
    #[must_use]
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Always fail with HTTP `status`
    #[must_use]
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
        })
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GenerateError::Status {
                status: *status,
                body: "scripted failure".to_string(),
            }),
        }
    }
}

/// Mount a chat-completions reply carrying `content`
pub async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        })))
        .mount(server)
        .await;
}

/// Mount create-site answering `status`
pub async fn mount_create_site(server: &MockServer, status: u16, hits: u64) {
    let template = if (200..300).contains(&status) {
        ResponseTemplate::new(status).set_body_json(json!({ "id": SITE_ID, "url": SITE_URL }))
    } else {
        ResponseTemplate::new(status).set_body_string("site rejected")
    };
    Mock::given(method("POST"))
        .and(path("/api/v1/sites"))
        .respond_with(template)
        .expect(hits)
        .mount(server)
        .await;
}

/// Mount upload-deploy answering `status`
pub async fn mount_upload(server: &MockServer, status: u16, hits: u64) {
    let template = if (200..300).contains(&status) {
        ResponseTemplate::new(status).set_body_json(json!({ "id": "deploy-1", "ssl_url": SSL_URL }))
    } else {
        ResponseTemplate::new(status).set_body_string("upload rejected")
    };
    Mock::given(method("POST"))
        .and(path_regex(r"^/api/v1/sites/[^/]+/deploys$"))
        .respond_with(template)
        .expect(hits)
        .mount(server)
        .await;
}

/// Create-site and upload both succeed once
pub async fn mount_hosting_success(server: &MockServer) {
    mount_create_site(server, 201, 1).await;
    mount_upload(server, 200, 1).await;
}
