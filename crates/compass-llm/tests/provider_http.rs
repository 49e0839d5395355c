//! End-to-end provider tests against a local stub HTTP server.

use std::net::SocketAddr;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use compass_config::LlmConfig;
use compass_core::enums::{RoadmapSource, Role};
use compass_core::request::RoadmapRequest;
use compass_llm::{RoadmapGenerator, mock_roadmap_for};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const ROADMAP_TEXT: &str = r#"```json
{"title": "Embedded Systems Path", "phases": [
  {"milestone": "Microcontrollers", "duration": "4 months", "skills": ["C", "GPIO"],
   "resources": [{"type": "Book", "name": "Make: AVR Programming", "link": "https://example.com/avr"}]}
]}
```"#;

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn chat_ok() -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers["authorization"], "Bearer test-key");
            assert_eq!(body["messages"][0]["role"], "system");
            assert!(body["messages"][1]["content"].as_str().unwrap().contains("Interests: C, IoT."));
            Json(json!({"choices": [{"message": {"role": "assistant", "content": ROADMAP_TEXT}}]}))
        }),
    )
}

fn gemini_ok() -> Router {
    Router::new().route(
        "/v1beta/models/{model}",
        post(
            |Path(model): Path<String>,
             Query(query): Query<std::collections::HashMap<String, String>>,
             Json(body): Json<Value>| async move {
                assert_eq!(model, "gemini-pro:generateContent");
                assert_eq!(query.get("key").map(String::as_str), Some("test-key"));
                let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
                assert!(text.starts_with("You are an expert academic advisor"));
                Json(json!({"candidates": [{"content": {"parts": [{"text": ROADMAP_TEXT}]}}]}))
            },
        ),
    )
}

fn always_500() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") })
}

fn request() -> RoadmapRequest {
    RoadmapRequest::new(
        Role::PreUniversity,
        "Electronics and Communication",
        vec!["C".into(), "IoT".into()],
        "jobs",
    )
}

fn chat_config(addr: SocketAddr) -> LlmConfig {
    LlmConfig {
        provider: "openai".into(),
        api_key: "test-key".into(),
        api_url: format!("http://{addr}/v1/chat/completions"),
        ..Default::default()
    }
}

fn gemini_config(addr: SocketAddr) -> LlmConfig {
    LlmConfig {
        provider: "gemini".into(),
        api_key: "test-key".into(),
        api_url: format!("http://{addr}"),
        ..Default::default()
    }
}

#[tokio::test]
async fn chat_completions_roadmap_is_returned() {
    let addr = spawn(chat_ok()).await;
    let generator = RoadmapGenerator::from_config(&chat_config(addr));
    assert_eq!(generator.provider_name(), "openai-compatible");

    let generated = generator.generate(&request()).await;
    assert_eq!(generated.source, RoadmapSource::Llm);
    assert_eq!(generated.roadmap.title, "Embedded Systems Path");
    assert_eq!(generated.roadmap.phases[0].resources[0].kind, "Book");
}

#[tokio::test]
async fn gemini_roadmap_is_returned() {
    let addr = spawn(gemini_ok()).await;
    let generator = RoadmapGenerator::from_config(&gemini_config(addr));
    assert_eq!(generator.provider_name(), "gemini");

    let generated = generator.generate(&request()).await;
    assert_eq!(generated.source, RoadmapSource::Llm);
    assert_eq!(generated.roadmap.phases[0].skills, vec!["C".to_string(), "GPIO".to_string()]);
}

#[tokio::test]
async fn chat_server_error_falls_back_to_template() {
    let addr = spawn(always_500()).await;
    let generated = RoadmapGenerator::from_config(&chat_config(addr))
        .generate(&request())
        .await;
    assert_eq!(generated.source, RoadmapSource::Mock);
    assert_eq!(generated.roadmap, mock_roadmap_for(&request()));
}

#[tokio::test]
async fn gemini_server_error_falls_back_to_template() {
    let addr = spawn(always_500()).await;
    let generated = RoadmapGenerator::from_config(&gemini_config(addr))
        .generate(&request())
        .await;
    assert_eq!(generated.source, RoadmapSource::Mock);
    assert_eq!(generated.roadmap.phases.len(), 4);
}

#[tokio::test]
async fn unreachable_endpoint_falls_back_to_template() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let generated = RoadmapGenerator::from_config(&chat_config(addr))
        .generate(&request())
        .await;
    assert_eq!(generated.source, RoadmapSource::Mock);
}
