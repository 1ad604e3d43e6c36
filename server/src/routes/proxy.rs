//! Same-origin forwarding of backend API and upload paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. `/api/*` and `/uploads/*` are
//! replayed against `BACKEND_URL` with the method, query, body and
//! end-to-end headers intact, so the backend's cookies and `Authorization`
//! handling behave as if it were called directly.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out backend becomes `502` with a JSON `detail`,
//! the same envelope the backend uses, tagged with `GATEWAY_FAILURE_HEADER`
//! so the client reports it as a network failure rather than a backend
//! verdict. Request bodies over `MAX_BODY_BYTES` get `413`; bodies that fail
//! mid-read get `400`. Upstream non-2xx responses pass through untouched.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{HeaderMap, HeaderName};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use lostective_client::net::transport::GATEWAY_FAILURE_HEADER;

use crate::state::AppState;

/// Largest request body buffered for forwarding (report photos included).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("could not build response: {0}")]
    Response(#[from] axum::http::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "request body too large"),
            Self::Body(_) => (StatusCode::BAD_REQUEST, "malformed request body"),
            Self::Upstream(_) | Self::Response(_) => (StatusCode::BAD_GATEWAY, "backend unavailable"),
        };
        tracing::warn!(error = %self, %status, "proxy request failed");
        let body = axum::Json(serde_json::json!({ "detail": detail }));
        if status == StatusCode::BAD_GATEWAY {
            (status, [(GATEWAY_FAILURE_HEADER, "1")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

/// Buffer the request body, refusing anything over `MAX_BODY_BYTES`.
async fn read_body(body: Body) -> Result<Vec<u8>, ProxyError> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ProxyError::Body(e.to_string()))?;
        if buf.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(ProxyError::TooLarge);
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Backend URL for an incoming request URI, keeping path and query.
pub fn upstream_url(backend: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{backend}{path_and_query}")
}

/// Connection-scoped headers that must not cross the proxy.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

fn end_to_end(headers: &HeaderMap) -> impl Iterator<Item = (&HeaderName, &axum::http::HeaderValue)> {
    headers.iter().filter(|(name, _)| !is_hop_by_hop(name))
}

/// Replay the request against the backend and relay its response.
///
/// # Errors
///
/// `ProxyError::TooLarge` when the request body exceeds `MAX_BODY_BYTES`,
/// `ProxyError::Body` when it cannot be read, and `ProxyError::Upstream`
/// when the backend cannot be reached in time.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.config.backend_url, &parts.uri);
    let bytes = read_body(body).await?;

    let mut upstream = state.http.request(parts.method.clone(), &url).body(bytes);
    for (name, value) in end_to_end(&parts.headers) {
        upstream = upstream.header(name, value);
    }

    let reply = upstream.send().await?;
    let status = reply.status();
    tracing::debug!(method = %parts.method, path = parts.uri.path(), %status, "forwarded");

    let headers = reply.headers().clone();
    let payload = reply.bytes().await?;

    let mut response = Response::builder().status(status);
    for (name, value) in end_to_end(&headers) {
        response = response.header(name, value);
    }
    Ok(response.body(Body::from(payload))?)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
