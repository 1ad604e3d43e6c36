//! Lost/found report submission workflow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both report routes sit behind the route guard, but the token is checked
//! again here: a missing token is a terminal local failure and no request is
//! built. `date` and `time` come from the client clock at submit time.
//!
//! ERROR HANDLING
//! ==============
//! Both variants normalize the backend `detail` through the same
//! `ErrorBody` path, so a field-error list reads the same on either form.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::PortalError;
use crate::net::api;
use crate::net::transport::{ImageUpload, Part, Transport};

pub const MUST_LOG_IN: &str = "You must log in first.";
pub const FILL_REQUIRED: &str = "Please fill in all required fields.";
pub const SUBMITTING: &str = "Submitting...";

/// Which report form is being submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    pub fn path(self) -> &'static str {
        match self {
            Self::Lost => api::REPORT_LOST_PATH,
            Self::Found => api::REPORT_FOUND_PATH,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Lost => "Lost item reported successfully!",
            Self::Found => "Found item reported successfully!",
        }
    }

    pub fn network_message(self) -> &'static str {
        match self {
            Self::Lost => "Failed to submit lost item.",
            Self::Found => "Failed to submit found item.",
        }
    }

    /// The photo is mandatory only when reporting a found item.
    pub fn requires_image(self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Controlled report form fields. `priority`/`wants_call` only apply to lost reports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub item_name: String,
    pub location: String,
    pub description: String,
    pub contact_info: String,
    pub priority: bool,
    pub wants_call: bool,
    pub image: Option<ImageUpload>,
}

impl ReportForm {
    /// First required field left empty, by form label.
    pub fn missing_field(&self, kind: ReportKind) -> Option<&'static str> {
        if self.item_name.is_empty() {
            Some("item_name")
        } else if self.location.is_empty() {
            Some("location")
        } else if self.contact_info.is_empty() {
            Some("contact_info")
        } else if kind.requires_image() && self.image.is_none() {
            Some("image")
        } else {
            None
        }
    }
}

/// Client-clock stamp sent with every report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportStamp {
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Wall-clock time in the given zone, `h:mm:ss AM`.
    pub time: String,
}

impl ReportStamp {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            date: now.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
            time: now.format("%-I:%M:%S %p").to_string(),
        }
    }

    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

fn text(name: &str, value: &str) -> (String, Part) {
    (name.to_owned(), Part::Text(value.to_owned()))
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Multipart fields in the exact order each endpoint expects.
pub fn build_parts(kind: ReportKind, form: &ReportForm, stamp: &ReportStamp) -> Vec<(String, Part)> {
    let mut parts = match kind {
        ReportKind::Found => vec![
            text("item_name", &form.item_name),
            text("location", &form.location),
            text("description", &form.description),
            text("contact_info", &form.contact_info),
            text("date", &stamp.date),
            text("time", &stamp.time),
        ],
        ReportKind::Lost => vec![
            text("item_name", &form.item_name),
            text("description", &form.description),
            text("date", &stamp.date),
            text("time", &stamp.time),
            text("location", &form.location),
            text("contact_info", &form.contact_info),
            text("priority", flag(form.priority)),
            text("wants_call", flag(form.wants_call)),
        ],
    };
    if let Some(image) = &form.image {
        parts.push(("image".to_owned(), Part::File(image.clone())));
    }
    parts
}

/// Local preconditions, in order: a session token, then the required fields.
///
/// # Errors
///
/// `Validation` naming what is missing.
fn precheck<'a>(kind: ReportKind, token: Option<&'a str>, form: &ReportForm) -> Result<&'a str, PortalError> {
    let Some(token) = token else {
        return Err(PortalError::Validation(MUST_LOG_IN.to_owned()));
    };
    if let Some(field) = form.missing_field(kind) {
        log::debug!("report blocked, {field} is empty");
        return Err(PortalError::Validation(FILL_REQUIRED.to_owned()));
    }
    Ok(token)
}

/// Check preconditions and post the report.
///
/// # Errors
///
/// `Validation` (no request issued) for a missing token or required field;
/// otherwise the `Server`/`Network` outcome of the upload.
pub async fn submit<T: Transport>(
    transport: &T,
    kind: ReportKind,
    token: Option<&str>,
    form: &ReportForm,
    stamp: &ReportStamp,
) -> Result<(), PortalError> {
    let token = precheck(kind, token, form)?;
    api::submit_report(transport, kind.path(), token, build_parts(kind, form, stamp)).await
}

/// Page-local form state and status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportState {
    pub kind: ReportKind,
    pub form: ReportForm,
    pub status: Option<String>,
    pub submitting: bool,
}

impl ReportState {
    pub fn new(kind: ReportKind) -> Self {
        Self { kind, form: ReportForm::default(), status: None, submitting: false }
    }

    /// Run the local preconditions and enter the submitting state.
    ///
    /// A failed precondition sets its message immediately and nothing is
    /// sent; a submission already in flight is left alone.
    pub fn begin_submit(&mut self, token: Option<&str>) -> bool {
        if self.submitting {
            return false;
        }
        if let Err(e) = precheck(self.kind, token, &self.form) {
            self.status = Some(e.to_string());
            return false;
        }
        self.submitting = true;
        self.status = Some(SUBMITTING.to_owned());
        true
    }

    /// Success resets every field; failure keeps them for a retry.
    pub fn apply_outcome(&mut self, outcome: &Result<(), PortalError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.form = ReportForm::default();
                self.status = Some(self.kind.success_message().to_owned());
            }
            Err(e) => self.status = Some(e.display_with(self.kind.network_message())),
        }
    }
}
