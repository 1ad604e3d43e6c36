//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by workflow (`session`, `catalog`, `claim`, `report`) so
//! each page depends on a small focused model and no workflow shares state
//! with another.

pub mod catalog;
pub mod claim;
pub mod report;
pub mod session;
