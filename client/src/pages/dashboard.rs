//! Dashboard page: entry point to the report forms, plus logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Logout only clears local session
//! state; the backend keeps no session to end.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::components::protected::Protected;
use crate::util::guard::{AppRoute, LOGIN_PATH};

/// Action tiles, in display order.
const ACTIONS: [(AppRoute, &str, &str); 3] = [
    (AppRoute::ReportLost, "Report a Lost Item", "Tell us what you lost and where you last saw it."),
    (AppRoute::ReportFound, "Report a Found Item", "Found something? Upload a photo so the owner can claim it."),
    (AppRoute::Browse, "Browse Items", "Search everything reported lost or found on campus."),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected route=AppRoute::Dashboard>
            <DashboardContent/>
        </Protected>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.manager.update(|m| m.logout());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="toolbar">
                <span class="toolbar__board-name">"Lostective Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <div class="dashboard-page__actions">
                {ACTIONS
                    .into_iter()
                    .map(|(route, title, blurb)| {
                        view! {
                            <a class="dashboard-page__action" href=route.path()>
                                <span class="dashboard-page__action-title">{title}</span>
                                <span class="dashboard-page__action-blurb">{blurb}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
