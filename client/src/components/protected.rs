//! Route guard wrapper for session-only views.
//!
//! DESIGN
//! ======
//! The check runs once per mount, after the persisted session has been
//! restored. Until a decision exists nothing protected is rendered, so a
//! blocked visitor never sees the view flash before the redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::util::guard::{AppRoute, GuardDecision, check_entry};

/// Render `children` only when `route` admits the current session.
#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let decision = RwSignal::new(None::<GuardDecision>);

    Effect::new(move || {
        if !session.restored.get() || decision.get_untracked().is_some() {
            return;
        }
        let mut candidate = session.manager.get_untracked();
        let verdict = check_entry(&mut candidate, route.access());
        if session.manager.with_untracked(|m| m.session() != candidate.session()) {
            session.manager.set(candidate);
        }
        if let GuardDecision::Redirect(to) = verdict {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        decision.set(Some(verdict));
    });

    view! {
        <Show
            when=move || decision.get() == Some(GuardDecision::Render)
            fallback=|| view! { <p class="guard-pending">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
