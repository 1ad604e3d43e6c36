//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, request
//! lifetimes, routing policy) from page and component logic.

pub mod guard;
pub mod scope;
pub mod storage;
