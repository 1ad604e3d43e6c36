//! Error taxonomy shared by every portal workflow.
//!
//! ERROR HANDLING
//! ==============
//! Each workflow terminates its own errors: pages translate a `PortalError`
//! into a status line and nothing escalates to a global handler. Network
//! causes are logged where they happen and never reach the user verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a portal operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    /// A local precondition failed; no request was issued.
    #[error("{0}")]
    Validation(String),
    /// The backend rejected the supplied credentials.
    #[error("{0}")]
    Auth(String),
    /// The request never produced a response.
    #[error("network error")]
    Network,
    /// The backend answered with a non-2xx status.
    #[error("{0}")]
    Server(String),
}

impl PortalError {
    /// User-facing text, substituting `network_message` for transport failures.
    pub fn display_with(&self, network_message: &str) -> String {
        match self {
            Self::Network => network_message.to_owned(),
            other => other.to_string(),
        }
    }
}
