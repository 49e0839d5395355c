//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use compass_db::CompassDb;
use compass_llm::{LlmError, LlmProvider, RoadmapGenerator};
use compass_server::{AppState, router};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

struct Unreachable;

#[async_trait]
impl LlmProvider for Unreachable {
    fn name(&self) -> &'static str {
        "unreachable"
    }
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "down".into(),
        })
    }
}

struct Scripted;

#[async_trait]
impl LlmProvider for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(r#"{"phases": [{"milestone": "Only", "duration": "1 month", "skills": ["a"], "resources": []}]}"#.into())
    }
}

async fn app_with(generator: RoadmapGenerator) -> Router {
    let db = CompassDb::open_local(":memory:").await.unwrap();
    router(AppState::new(generator, db))
}

async fn app() -> Router {
    app_with(RoadmapGenerator::mock_only()).await
}

fn json_request(method: &str, uri: &str, user: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: &str, uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

fn save_body(title: &str) -> Value {
    json!({
        "title": title,
        "phases": [{"milestone": "Start", "duration": "1 month", "skills": ["x"], "resources": []}],
        "branch": "CSE",
        "interests": ["AI"],
        "focus": "jobs"
    })
}

#[tokio::test]
async fn generate_returns_template_without_provider() {
    let app = app().await;
    let body = json!({
        "branch": "Computer Science and Engineering",
        "interests": ["AI", "web"],
        "focus": "career change",
        "role": "undergraduate"
    });
    let (status, value) = send(&app, json_request("POST", "/api/v1/roadmaps/generate", None, &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["generated"], true);
    assert_eq!(value["source"], "mock");
    assert_eq!(value["branch"], "Computer Science and Engineering");
    assert_eq!(value["interests"], json!(["AI", "web"]));
    assert_eq!(value["phases"].as_array().unwrap().len(), 4);
    assert!(value["title"].as_str().unwrap().contains("career change"));
}

#[tokio::test]
async fn generate_accepts_comma_separated_interests_and_course_id() {
    let app = app().await;
    let body = json!({"courseId": "Biology", "interests": "genetics, , ecology", "focus": "research"});
    let (status, value) = send(&app, json_request("POST", "/api/v1/roadmaps/generate", None, &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["branch"], "Biology");
    assert_eq!(value["interests"], json!(["genetics", "ecology"]));
}

#[tokio::test]
async fn generate_defaults_branch() {
    let app = app().await;
    let body = json!({"interests": ["art"], "focus": "jobs"});
    let (_, value) = send(&app, json_request("POST", "/api/v1/roadmaps/generate", None, &body)).await;
    assert_eq!(value["branch"], "General Studies");
}

#[rstest]
#[case(json!({"focus": "jobs"}))]
#[case(json!({"interests": ["AI"]}))]
#[case(json!({"interests": [], "focus": "jobs"}))]
#[case(json!({"interests": "AI", "focus": "   "}))]
#[tokio::test]
async fn generate_requires_interests_and_focus(#[case] body: Value) {
    let app = app().await;
    let (status, value) = send(&app, json_request("POST", "/api/v1/roadmaps/generate", None, &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({"error": "Interests and focus required"}));
}

#[tokio::test]
async fn generate_rejects_malformed_json() {
    let app = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/roadmaps/generate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, value) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn generate_survives_failing_provider() {
    let app = app_with(RoadmapGenerator::with_provider(Box::new(Unreachable), Duration::from_secs(5))).await;
    let body = json!({"branch": "ECE", "interests": ["IoT"], "focus": "jobs"});
    let (status, value) = send(&app, json_request("POST", "/api/v1/roadmaps/generate", None, &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["source"], "mock");
    assert_eq!(value["phases"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn generate_fills_missing_llm_title() {
    let app = app_with(RoadmapGenerator::with_provider(Box::new(Scripted), Duration::from_secs(5))).await;
    let body = json!({"branch": "ECE", "interests": ["IoT"], "focus": "jobs"});
    let (_, value) = send(&app, json_request("POST", "/api/v1/roadmaps/generate", None, &body)).await;
    assert_eq!(value["source"], "llm");
    assert_eq!(value["title"], "ECE Roadmap");
}

#[tokio::test]
async fn save_requires_caller() {
    let app = app().await;
    let (status, value) = send(&app, json_request("POST", "/api/v1/roadmaps/save", None, &save_body("x"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(value, json!({"error": "Access token required"}));
}

#[rstest]
#[case(json!({"phases": []}))]
#[case(json!({"title": "No phases"}))]
#[case(json!({"title": "", "phases": []}))]
#[tokio::test]
async fn save_requires_title_and_phases(#[case] body: Value) {
    let app = app().await;
    let (status, value) = send(&app, json_request("POST", "/api/v1/roadmaps/save", Some("alice"), &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({"error": "Title and phases are required"}));
}

#[tokio::test]
async fn save_list_get_delete_lifecycle() {
    let app = app().await;

    let (status, saved) =
        send(&app, json_request("POST", "/api/v1/roadmaps/save", Some("alice"), &save_body("Mine"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["userId"], "alice");
    assert_eq!(saved["title"], "Mine");
    let id = saved["id"].as_str().unwrap().to_string();

    let (status, list) = send(&app, empty_request("GET", "/api/v1/roadmaps", Some("alice"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (_, others) = send(&app, empty_request("GET", "/api/v1/roadmaps", Some("bob"))).await;
    assert_eq!(others, json!([]));

    let uri = format!("/api/v1/roadmaps/{id}");
    let (status, fetched) = send(&app, empty_request("GET", &uri, Some("alice"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id.as_str());

    let (status, value) = send(&app, empty_request("GET", &uri, Some("bob"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(value, json!({"error": "Unauthorized"}));

    let (status, _) = send(&app, empty_request("DELETE", &uri, Some("bob"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, value) = send(&app, empty_request("DELETE", &uri, Some("alice"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({"message": "Roadmap deleted"}));

    let (status, value) = send(&app, empty_request("GET", &uri, Some("alice"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value, json!({"error": "Roadmap not found"}));
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let app = app().await;
    let (status, _) = send(&app, empty_request("DELETE", "/api/v1/roadmaps/rmp-00000000", Some("alice"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_state() {
    let app = app().await;
    let (status, value) = send(&app, empty_request("GET", "/api/v1/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status"], "Backend is running");
    assert_eq!(value["database"], "Connected");
    assert_eq!(value["llm"], "mock");
    assert!(value["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = app().await;
    let (status, value) = send(&app, empty_request("GET", "/api/v1/degrees", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        value,
        json!({"error": "Not Found", "message": "Route GET /api/v1/degrees not found"})
    );
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app().await;
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/health")
        .header("origin", "https://student.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_preflight_allows_authorization_header() {
    let app = app().await;
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/roadmaps/generate")
        .header("origin", "https://student.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "authorization,content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-headers"], "*");
}

#[rstest]
#[case("PUT", "/api/v1/roadmaps/save")]
#[case("GET", "/api/v1/roadmaps/generate")]
#[case("PATCH", "/api/v1/roadmaps/rmp-00000000")]
#[tokio::test]
async fn wrong_method_on_known_path_is_json_404(#[case] method: &str, #[case] uri: &str) {
    let app = app().await;
    let (status, value) = send(&app, empty_request(method, uri, Some("alice"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        value,
        json!({"error": "Not Found", "message": format!("Route {method} {uri} not found")})
    );
}

#[tokio::test]
async fn save_reports_storage_failure_as_500() {
    let db = CompassDb::open_local(":memory:").await.unwrap();
    db.conn().execute("DROP TABLE roadmaps", ()).await.unwrap();
    let app = router(AppState::new(RoadmapGenerator::mock_only(), db));

    let (status, value) =
        send(&app, json_request("POST", "/api/v1/roadmaps/save", Some("alice"), &save_body("Mine"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = value["error"].as_str().unwrap();
    assert!(message.contains("no such table"), "unexpected error: {message}");
}
