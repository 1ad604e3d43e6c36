//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds one request per endpoint, `transport` is the seam workflows
//! send through, `fetch` is the browser implementation of that seam, and
//! `types` defines the wire schema.

pub mod api;
#[cfg(feature = "hydrate")]
pub mod fetch;
pub mod transport;
pub mod types;
