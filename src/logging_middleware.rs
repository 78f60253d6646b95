// src/logging_middleware.rs
//! Per-request logging: request id, outcome line, optional body dumps

use axum::body::to_bytes;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::common::helpers::mask_email_fields;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Whether request/response bodies are dumped at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyLogging {
    pub enabled: bool,
}

/// Tags every response with `x-request-id` (reusing the caller's id when
/// present) and logs one completion line per request.
pub async fn log_request_response(
    State(body_logging): State<BodyLogging>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let request = if body_logging.enabled {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, usize::MAX)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;
        log_body(&request_id, "📥 Request", &bytes);
        Request::from_parts(parts, Body::from(bytes))
    } else {
        request
    };

    let response = next.run(request).await;

    let mut response = if body_logging.enabled {
        let (parts, body) = response.into_parts();
        let bytes = to_bytes(body, usize::MAX)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        log_body(&request_id, "📤 Response", &bytes);
        Response::from_parts(parts, Body::from(bytes))
    } else {
        response
    };

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    Ok(response)
}

/// JSON bodies are logged with emails masked; anything else only by size
fn log_body(request_id: &str, label: &str, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }

    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(mut json) => {
            mask_email_fields(&mut json);
            debug!(request_id = %request_id, body = %json, "{}", label);
        }
        Err(_) => {
            debug!(request_id = %request_id, body_bytes = bytes.len(), "{}", label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::Request as HttpRequest, middleware, routing::post, Router};
    use tower::ServiceExt;

    fn echo_app(enabled: bool) -> Router {
        Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn_with_state(
                BodyLogging { enabled },
                log_request_response,
            ))
    }

    #[tokio::test]
    async fn test_assigns_request_id() {
        let response = echo_app(false)
            .oneshot(
                HttpRequest::post("/echo")
                    .body(Body::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();

        let id = response.headers().get(&REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_keeps_caller_request_id_and_body() {
        let response = echo_app(true)
            .oneshot(
                HttpRequest::post("/echo")
                    .header(&REQUEST_ID_HEADER, "req-123")
                    .body(Body::from(r#"{"email":"jane@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get(&REQUEST_ID_HEADER).unwrap(), "req-123");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        // Masking applies to the log line only, never to the payload
        assert_eq!(&bytes[..], br#"{"email":"jane@example.com"}"#);
    }
}
