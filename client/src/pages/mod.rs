//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose components and own page-local form state. Session-only
//! pages wrap their content in `components::protected::Protected`.

pub mod browse;
pub mod dashboard;
pub mod login;
pub mod report;
pub mod signup;
