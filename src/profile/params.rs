// src/profile/params.rs
//! Action parameters from a query string, form post or JSON body

use async_trait::async_trait;
use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Query, Request},
    http::{header::CONTENT_TYPE, Method},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::convert::Infallible;
use tracing::debug;

use crate::common::helpers::value_as_text;
use crate::common::ApiError;

/// Flat parameter bag for one request
///
/// GET requests read the query string; other methods read the body as
/// `application/json` (an object), `multipart/form-data` (text parts only)
/// or as a urlencoded form. A body that
/// cannot be read yields an empty bag, which later resolves to an invalid
/// action instead of a transport-level rejection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionParams(Map<String, Value>);

impl ActionParams {
    /// The requested action name, "" when absent
    pub fn action(&self) -> String {
        self.0.get("action").map(value_as_text).unwrap_or_default()
    }

    /// Decodes the bag into a request DTO; missing fields take the DTO defaults
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| ApiError::InternalServer(format!("decoding action params: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for ActionParams {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for ActionParams {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ActionParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.method() == Method::GET || req.method() == Method::HEAD {
            let params = Query::<HashMap<String, String>>::try_from_uri(req.uri())
                .map(|Query(query)| ActionParams::from(query))
                .unwrap_or_else(|e| {
                    debug!(error = %e, "Unreadable query string, treating as empty");
                    ActionParams::default()
                });
            return Ok(params);
        }

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.trim_start().to_ascii_lowercase())
            .unwrap_or_default();

        let params = if content_type.starts_with("application/json") {
            match Json::<Map<String, Value>>::from_request(req, state).await {
                Ok(Json(body)) => ActionParams::from(body),
                Err(rejection) => {
                    debug!(error = %rejection, "Unreadable JSON body, treating as empty");
                    ActionParams::default()
                }
            }
        } else if content_type.starts_with("multipart/form-data") {
            let read = match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await.map_err(|e| e.to_string()),
                Err(rejection) => Err(rejection.to_string()),
            };
            read.unwrap_or_else(|e| {
                debug!(error = %e, "Unreadable multipart body, treating as empty");
                ActionParams::default()
            })
        } else {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(body)) => ActionParams::from(body),
                Err(rejection) => {
                    debug!(error = %rejection, "Unreadable form body, treating as empty");
                    ActionParams::default()
                }
            }
        };

        Ok(params)
    }
}

/// Collects the named text parts; file uploads are skipped
async fn read_multipart(mut multipart: Multipart) -> Result<ActionParams, MultipartError> {
    let mut fields = Map::new();

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let text = field.text().await?;
        fields.insert(name, Value::String(text));
    }

    Ok(ActionParams(fields))
}
