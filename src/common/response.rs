// Success envelope builders

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use super::ApiError;

pub type ActionResult = Result<Json<Value>, ApiError>;

/// `{"success": true, "message": ...}`
pub fn success_message(message: &str) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": message,
    }))
}

/// `{"success": true, <key>: <payload>}`
pub fn success_with<T: Serialize>(key: &str, payload: &T) -> ActionResult {
    let value = serde_json::to_value(payload)
        .map_err(|e| ApiError::InternalServer(format!("serializing {}: {}", key, e)))?;

    let mut body = serde_json::Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    body.insert(key.to_string(), value);
    Ok(Json(Value::Object(body)))
}
