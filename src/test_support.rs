//! Shared fixtures for handler tests: in-memory database, state, tokens

use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::auth::tokens::issue_session_token;
use crate::common::{dev_mode::DevModeConfig, migrations::run_migrations, AppState};
use crate::profile::handlers::ActionRegistry;
use crate::services::PlaceholderMetrics;

pub const TEST_SECRET: &str = "test_secret_key";

/// Single connection so every query sees the same in-memory database
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool, false).await.unwrap();
    pool
}

pub fn test_state(pool: SqlitePool) -> Arc<RwLock<AppState>> {
    Arc::new(RwLock::new(AppState {
        db: pool,
        jwt_secret: TEST_SECRET.to_string(),
        dev_mode: DevModeConfig::disabled(),
        actions: Arc::new(ActionRegistry::profile_actions()),
        placeholder_metrics: Arc::new(PlaceholderMetrics::default()),
    }))
}

pub fn bearer(user_id: &str, role: &str) -> String {
    let token = issue_session_token(TEST_SECRET, user_id, role, Duration::hours(1)).unwrap();
    format!("Bearer {}", token)
}

pub async fn seed_user(pool: &SqlitePool, id: &str, role: &str) {
    sqlx::query("INSERT INTO users (id, role) VALUES (?, ?)")
        .bind(id)
        .bind(role)
        .execute(pool)
        .await
        .unwrap();
}

pub fn get(path_and_query: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(path_and_query);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(path: &str, auth: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn post_json(path: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "XB";

/// `multipart/form-data` body with one text part per field
pub fn post_multipart(path: &str, auth: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            MULTIPART_BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", MULTIPART_BOUNDARY));

    let mut builder = Request::builder().method(Method::POST).uri(path).header(
        CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
    );
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    builder.body(Body::from(body)).unwrap()
}

/// Runs one request through the router and decodes the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}
