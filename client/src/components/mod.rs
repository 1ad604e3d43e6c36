//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog cards, the claim dialog and the route guard,
//! reading shared session state from the Leptos context `App` provides.

pub mod claim_modal;
pub mod item_card;
pub mod protected;
