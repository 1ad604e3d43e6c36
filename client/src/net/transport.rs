//! Transport seam between portal workflows and the HTTP stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Workflows build an `ApiRequest` and hand it to a `Transport`. In the
//! browser that is `net::fetch::FetchTransport`; tests substitute a recording
//! fake so "no request was issued" is directly observable.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// HTTP verbs used by the backend contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An image attached to a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One multipart field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Part {
    Text(String),
    File(ImageUpload),
}

/// Request payload variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Ordered `(name, value)` pairs; order is preserved on the wire.
    Multipart(Vec<(String, Part)>),
}

/// A fully described backend request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Body,
    pub bearer: Option<String>,
    pub include_credentials: bool,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_owned(),
            body: Body::Empty,
            bearer: None,
            include_credentials: false,
        }
    }

    pub fn post(path: &str, body: Body) -> Self {
        Self { method: Method::Post, body, ..Self::get(path) }
    }

    #[must_use]
    pub fn with_credentials(mut self) -> Self {
        self.include_credentials = true;
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// `Authorization` header value, if a bearer token is attached.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// Response header the host sets on replies it synthesized because the
/// backend could not be reached. Its presence marks the exchange as a
/// network failure even though an HTTP status arrived.
pub const GATEWAY_FAILURE_HEADER: &str = "x-lostective-gateway";

/// Status and raw body text of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    /// Set when the reply came from the host proxy rather than the backend.
    pub gateway_failure: bool,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), gateway_failure: false }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not complete (DNS, CORS, offline, aborted).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Sends `ApiRequest`s. Implementations run on the single UI thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
