//! REST calls against the portal backend.
//!
//! Every function takes the `Transport` to use, builds the exact request the
//! backend contract prescribes, and maps the outcome onto `PortalError`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are logged here and surface as `PortalError::Network`;
//! so do replies the host proxy synthesized for an unreachable backend.
//! Callers pick their own user-facing wording. Non-2xx bodies are normalized
//! through `ErrorBody::message_or` regardless of endpoint.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, Body, Part, Transport};
use super::types::{ClaimRequest, Credentials, ErrorBody, Item, LoginResponse, SignupRequest};
use crate::error::PortalError;

pub const LOGIN_PATH: &str = "/api/login";
pub const ITEMS_PATH: &str = "/api/items";
pub const CLAIM_PATH: &str = "/api/claim_item";
pub const REPORT_LOST_PATH: &str = "/api/report_lost";
pub const REPORT_FOUND_PATH: &str = "/api/report_found";

pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed.";
pub const CLAIM_FAILED: &str = "Error submitting claim";
pub const REPORT_FAILED: &str = "Failed to submit.";
const ITEMS_FAILED: &str = "Error fetching items";

fn json_body<T: Serialize>(value: &T) -> Result<Body, PortalError> {
    serde_json::to_value(value)
        .map(Body::Json)
        .map_err(|e| PortalError::Validation(e.to_string()))
}

async fn exchange<T: Transport>(transport: &T, request: ApiRequest) -> Result<ApiResponse, PortalError> {
    let path = request.path.clone();
    let resp = transport.send(request).await.map_err(|e| {
        log::warn!("request to {path} failed: {e}");
        PortalError::Network
    })?;
    if resp.gateway_failure {
        log::warn!("request to {path} failed: backend unreachable ({})", resp.status);
        return Err(PortalError::Network);
    }
    Ok(resp)
}

fn server_error(resp: &ApiResponse, fallback: &str) -> String {
    ErrorBody::parse(&resp.body).message_or(fallback)
}

/// Exchange credentials for a bearer token via `POST /api/login`.
///
/// # Errors
///
/// `Auth` with the server's detail on any non-2xx status, `Network` when no
/// response arrived.
pub async fn login<T: Transport>(transport: &T, credentials: &Credentials) -> Result<String, PortalError> {
    let request = ApiRequest::post(LOGIN_PATH, json_body(credentials)?);
    let resp = exchange(transport, request).await?;
    if !resp.is_success() {
        return Err(PortalError::Auth(server_error(&resp, LOGIN_FAILED)));
    }
    serde_json::from_str::<LoginResponse>(&resp.body)
        .map(|body| body.access_token)
        .map_err(|e| {
            log::warn!("login response missing access_token: {e}");
            PortalError::Auth(LOGIN_FAILED.to_owned())
        })
}

/// Register a new account through the login endpoint.
///
/// # Errors
///
/// `Server` with the server's detail on non-2xx, `Network` when no response arrived.
pub async fn signup<T: Transport>(transport: &T, request: &SignupRequest) -> Result<(), PortalError> {
    let req = ApiRequest::post(LOGIN_PATH, json_body(request)?);
    let resp = exchange(transport, req).await?;
    if !resp.is_success() {
        return Err(PortalError::Server(server_error(&resp, SIGNUP_FAILED)));
    }
    log::debug!("signup accepted");
    Ok(())
}

/// Fetch the whole catalog from `GET /api/items` (cookies included).
///
/// # Errors
///
/// `Server` on non-2xx or an undecodable list, `Network` when no response arrived.
pub async fn fetch_items<T: Transport>(transport: &T) -> Result<Vec<Item>, PortalError> {
    let resp = exchange(transport, ApiRequest::get(ITEMS_PATH).with_credentials()).await?;
    if !resp.is_success() {
        return Err(PortalError::Server(server_error(&resp, ITEMS_FAILED)));
    }
    serde_json::from_str(&resp.body).map_err(|e| PortalError::Server(format!("malformed item list: {e}")))
}

/// Submit an ownership claim via `POST /api/claim_item`.
///
/// # Errors
///
/// `Server` with the server's detail on non-2xx, `Network` when no response arrived.
pub async fn submit_claim<T: Transport>(transport: &T, claim: &ClaimRequest) -> Result<(), PortalError> {
    let resp = exchange(transport, ApiRequest::post(CLAIM_PATH, json_body(claim)?)).await?;
    if !resp.is_success() {
        return Err(PortalError::Server(server_error(&resp, CLAIM_FAILED)));
    }
    log::info!("claim submitted for item {}", claim.item_id);
    Ok(())
}

/// Post a multipart report to `path` with a bearer token.
///
/// # Errors
///
/// `Server` with the normalized detail on non-2xx, `Network` when no response arrived.
pub async fn submit_report<T: Transport>(
    transport: &T,
    path: &str,
    token: &str,
    parts: Vec<(String, Part)>,
) -> Result<(), PortalError> {
    let request = ApiRequest::post(path, Body::Multipart(parts)).with_bearer(token);
    let resp = exchange(transport, request).await?;
    if !resp.is_success() {
        return Err(PortalError::Server(server_error(&resp, REPORT_FAILED)));
    }
    log::info!("report accepted by {path}");
    Ok(())
}
