use std::collections::BTreeMap;

use axum::Json;
use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{HeaderMap, Method, Uri};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

/// GET|POST /api/echo - Reflect the request back to the caller.
///
/// JSON bodies are echoed as JSON, other bodies as a string, and an empty
/// body as null.
pub async fn echo(
    method: Method,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<EchoResponse> {
    let headers = headers
        .iter()
        .filter(|(name, _)| *name != axum::http::header::AUTHORIZATION)
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect();

    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };

    Json(EchoResponse {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    })
}
