#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use ideas_service::config::IdeasConfig;
use ideas_service::startup::{AppState, Application};
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn with no provider credentials: every request uses the templates.
    pub async fn spawn() -> Self {
        Self::spawn_with_config(IdeasConfig::offline(test_core_config())).await
    }

    pub async fn spawn_with_config(config: IdeasConfig) -> Self {
        Self::spawn_with_state(AppState::from_config(config)).await
    }

    pub async fn spawn_with_state(state: AppState) -> Self {
        let app = Application::build_with_state(state)
            .await
            .expect("Failed to build test application");

        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
            client,
        }
    }

    pub async fn post_generate(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/generate", self.http_address))
            .json(&body)
            .send()
            .await
            .expect("Failed to send request")
    }
}

pub fn test_core_config() -> CoreConfig {
    CoreConfig {
        port: 0,
        log_level: "debug".to_string(),
    }
}

/// A request received by [`StubProvider`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: serde_json::Value,
    path: &'static str,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Local stand-in for a provider API that answers one route with a canned reply.
pub struct StubProvider {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn stub_handler(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.captured.lock().unwrap().push(CapturedRequest {
        path: state.path.to_string(),
        headers,
        body,
    });
    (state.status, Json(state.reply.clone()))
}

impl StubProvider {
    pub async fn start(path: &'static str, status: u16, reply: serde_json::Value) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).unwrap(),
            reply,
            path,
            captured: captured.clone(),
        };

        let router = Router::new()
            .route(path, post(stub_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        StubProvider {
            base_url: format!("http://127.0.0.1:{}", port),
            captured,
        }
    }

    /// Anthropic-shaped stub whose first content block carries `text`.
    pub async fn anthropic(status: u16, text: &str) -> Self {
        Self::start(
            "/v1/messages",
            status,
            serde_json::json!({
                "id": "msg_test",
                "type": "message",
                "role": "assistant",
                "content": [{ "type": "text", "text": text }]
            }),
        )
        .await
    }

    /// OpenAI-shaped stub whose first choice carries `text`.
    pub async fn openai(status: u16, text: &str) -> Self {
        Self::start(
            "/v1/chat/completions",
            status,
            serde_json::json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": text },
                    "finish_reason": "stop"
                }]
            }),
        )
        .await
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on, for transport failures.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub const IDEAS_REPLY: &str = r#"Here are three ideas:
[
  {"title": "Remote One", "hook": "Hook one", "script": "[0-3s] one", "hashtags": ["a", "b", "c", "d", "e"], "viralityScore": 81, "reasoning": "because"},
  {"title": "Remote Two", "hook": "Hook two", "script": "[0-3s] two", "hashtags": ["f"], "viralityScore": 90, "reasoning": "because"},
  {"title": "Remote Three", "hook": "Hook three", "script": "[0-3s] three", "hashtags": [], "viralityScore": 74, "reasoning": "because"}
]
Good luck!"#;
