//! Router wiring tests over the in-memory store

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::MemoryItemStore;
use tower::ServiceExt;

use crate::config::ApiConfig;
use crate::router::build_router;

fn test_config() -> ApiConfig {
    let mut config = ApiConfig::from_lookup(|name| match name {
        "ADMIN_EMAILS" => Some("admin@example.com".to_string()),
        "CORS_ORIGINS" => Some("http://localhost:3000".to_string()),
        "JWT_SECRET_KEY" => Some("test-secret".to_string()),
        _ => None,
    })
    .unwrap();
    config.auth.password_cost = platform::password::PasswordCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    };
    config
}

fn app() -> Router {
    build_router(MemoryItemStore::new(), &test_config()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "service": "PersonalSite API" }));
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = send(&app(), get("/api/nothing-here")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contexts_share_store_and_tokens() {
    let app = app();

    let (status, registered) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({
                "email": "admin@example.com",
                "display_name": "Admin",
                "password": "correct horse battery",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["user"]["role"], "admin");
    let token = registered["access_token"].as_str().unwrap().to_string();

    let (status, post) = send(
        &app,
        json_request(
            "POST",
            "/api/blog",
            Some(&token),
            json!({ "title": "Hello", "summary": "S", "content": "C" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(post["author_email"], "admin@example.com");

    let (status, project) = send(
        &app,
        json_request(
            "POST",
            "/api/projects",
            Some(&token),
            json!({ "title": "Site", "tech_stack": "Rust", "date_range": "2025", "bullets": ["b"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(project["title"], "Site");

    let (_, posts) = send(&app, get("/api/blog")).await;
    assert_eq!(posts["count"], 1);

    let (_, experiences) = send(&app, get("/api/experiences")).await;
    assert_eq!(experiences, json!({ "experiences": [], "count": 0 }));
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/blog")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
