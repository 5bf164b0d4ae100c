#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use film_api::router::init_router;
use film_api::state::AppState;
use film_auth::{SessionUser, issue_token};
use film_config::{CorsConfig, JwtConfig};
use film_db::Gateway;
use film_models::{RecordId, Role};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        token_expiry: 3600,
    }
}

pub fn test_state(gateway: Gateway) -> AppState {
    AppState {
        gateway,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

/// Router over an empty document store.
pub fn setup_test_app() -> (Router, Gateway) {
    let gateway = Gateway::document();
    (init_router(test_state(gateway.clone())), gateway)
}

/// A token for an account that need not exist in the store.
pub fn token_for(role: Role) -> String {
    let user = SessionUser {
        id: RecordId::Object("65a1f0c2e4b0a1b2c3d4e5f6".to_string()),
        username: format!("{}-tester", role),
        role,
    };
    issue_token(&user, &test_jwt_config()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Sends one request and returns the status with the parsed body (`Null` when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
