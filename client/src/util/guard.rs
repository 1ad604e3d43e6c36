//! Route table and access guard shared by every route component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected views run `check_entry` once when they mount. The check is not
//! reactive: a session that disappears mid-visit blocks the next protected
//! navigation but leaves the view already on screen alone. Rejected
//! navigations are replaced by `/login` and the destination is forgotten.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionManager;
use crate::util::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Whether a view needs a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// Views reachable in the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Browse,
    Login,
    Signup,
    Dashboard,
    ReportLost,
    ReportFound,
}

impl AppRoute {
    /// Canonical path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Browse => "/browse",
            Self::Login => LOGIN_PATH,
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::ReportLost => "/report-lost",
            Self::ReportFound => "/report-found",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Dashboard | Self::ReportLost | Self::ReportFound => Access::Protected,
            Self::Browse | Self::Login | Self::Signup => Access::Public,
        }
    }
}

/// Outcome of evaluating a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Pure gate: protected views need an authenticated session.
pub fn evaluate(access: Access, authenticated: bool) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Render,
        Access::Protected if authenticated => GuardDecision::Render,
        Access::Protected => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Evaluate an entry after re-syncing the manager with persisted state.
pub fn check_entry<S: KeyValueStore>(manager: &mut SessionManager<S>, access: Access) -> GuardDecision {
    let authenticated = manager.revalidate();
    let decision = evaluate(access, authenticated);
    if let GuardDecision::Redirect(to) = decision {
        log::debug!("navigation blocked, redirecting to {to}");
    }
    decision
}
