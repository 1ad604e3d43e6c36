//! Wire DTOs for the portal backend REST contract.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde round-trips stay
//! lossless. Error bodies are decoded into a tagged `ErrorDetail` and turned
//! into display text in exactly one place (`ErrorDetail::message`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Reporter perspective of an item; fixed by the backend at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(alias = "lost")]
    Lost,
    #[serde(alias = "found")]
    Found,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
        }
    }
}

/// A catalog entry as returned by `GET /api/items`.
///
/// Extra backend fields (`ownerName`, `is_claimed`, ...) are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ItemStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    /// Backend-relative path such as `/uploads/abc.png`; empty strings decode as `None`.
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub image_url: Option<String>,
}

const PREVIEW_CHARS: usize = 80;

impl Item {
    /// Card teaser: first 80 characters of the description.
    pub fn description_preview(&self) -> String {
        let head: String = self.description.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }

    /// Location text for cards, `"Unknown"` when the backend has none.
    pub fn location_label(&self) -> &str {
        if self.location.is_empty() { "Unknown" } else { &self.location }
    }
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

/// `POST /api/login` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /api/login` body used for registration; the backend creates the
/// account when the email is unknown and a name is supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful `POST /api/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// `POST /api/claim_item` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClaimRequest {
    pub item_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub proof: String,
}

/// One entry of a validation-error list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl FieldError {
    fn render(&self) -> String {
        let path = self
            .loc
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        let path = if path.is_empty() { "field".to_owned() } else { path };
        format!("{path}: {}", self.msg)
    }
}

/// The three shapes the backend uses for `detail`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
    Other(serde_json::Value),
}

impl ErrorDetail {
    /// Collapse any detail shape into one display line. Empty details yield `None`.
    pub fn message(&self) -> Option<String> {
        let text = match self {
            Self::Message(s) => s.clone(),
            Self::Fields(errors) => errors.iter().map(FieldError::render).collect::<Vec<_>>().join("; "),
            Self::Other(serde_json::Value::Null) => String::new(),
            Self::Other(value) => value.to_string(),
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Error response envelope `{ "detail": ... }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

impl ErrorBody {
    /// Decode an error body; non-JSON text becomes a plain message detail.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(body) => body,
            Err(_) if raw.trim().is_empty() => Self::default(),
            Err(_) => Self { detail: Some(ErrorDetail::Message(raw.to_owned())) },
        }
    }

    /// Normalized detail text, or `fallback` when the body carries none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.detail
            .as_ref()
            .and_then(ErrorDetail::message)
            .unwrap_or_else(|| fallback.to_owned())
    }
}
