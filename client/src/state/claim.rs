//! Claim workflow bound to one selected catalog item.
//!
//! The form lives only as long as the claim modal. Validation is an
//! emptiness check on all four fields (no trimming) and runs before any
//! request is built. A successful claim does not touch the catalog; the
//! backend alone decides how claims resolve.

#[cfg(test)]
#[path = "claim_test.rs"]
mod claim_test;

use crate::error::PortalError;
use crate::net::api;
use crate::net::transport::Transport;
use crate::net::types::{ClaimRequest, Item};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const CLAIM_SUBMITTED: &str = "Claim submitted successfully! We'll contact you soon.";
pub const CLAIM_NETWORK_ERROR: &str = "Network error submitting claim";

/// Controlled claim form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub proof: String,
}

impl ClaimForm {
    /// Build the request body for `item_id`.
    ///
    /// # Errors
    ///
    /// `Validation` when any field is empty.
    pub fn validate(&self, item_id: &str) -> Result<ClaimRequest, PortalError> {
        let fields = [&self.name, &self.email, &self.phone, &self.proof];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(PortalError::Validation(FILL_ALL_FIELDS.to_owned()));
        }
        Ok(ClaimRequest {
            item_id: item_id.to_owned(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            proof: self.proof.clone(),
        })
    }
}

/// Validate and send a claim for `item`.
///
/// # Errors
///
/// `Validation` without any request when a field is empty; otherwise the
/// `Server`/`Network` outcome of the claim call.
pub async fn submit<T: Transport>(transport: &T, item: &Item, form: &ClaimForm) -> Result<(), PortalError> {
    let request = form.validate(&item.id)?;
    api::submit_claim(transport, &request).await
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClaimStatus {
    #[default]
    Editing,
    Submitting,
    Failed(String),
}

/// Modal-local state.
#[derive(Clone, Debug, Default)]
pub struct ClaimState {
    pub form: ClaimForm,
    pub status: ClaimStatus,
}

impl ClaimState {
    /// Validate the form for `item_id` and enter `Submitting`.
    ///
    /// An empty field fails right here with the validation message and
    /// nothing is sent; a submission already in flight is left alone.
    pub fn begin_submit(&mut self, item_id: &str) -> bool {
        if self.status == ClaimStatus::Submitting {
            return false;
        }
        if let Err(e) = self.form.validate(item_id) {
            self.status = ClaimStatus::Failed(e.to_string());
            return false;
        }
        self.status = ClaimStatus::Submitting;
        true
    }

    /// Record the outcome. Returns the confirmation to show once the modal
    /// closes, or `None` when the modal stays open with an error.
    pub fn apply_outcome(&mut self, outcome: &Result<(), PortalError>) -> Option<String> {
        match outcome {
            Ok(()) => {
                self.status = ClaimStatus::Editing;
                Some(CLAIM_SUBMITTED.to_owned())
            }
            Err(e) => {
                self.status = ClaimStatus::Failed(e.display_with(CLAIM_NETWORK_ERROR));
                None
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ClaimStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
