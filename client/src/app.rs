//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    browse::BrowsePage,
    dashboard::DashboardPage,
    login::LoginPage,
    report::{ReportFoundPage, ReportLostPage},
    signup::SignupPage,
};
use crate::state::session::PortalSession;
use crate::util::guard::HOME_PATH;
use crate::util::storage::BrowserStorage;

/// Session signal plus a flag telling views the persisted state has been read.
///
/// Restoration happens after hydration so server and client render the same
/// markup; session-dependent views wait for `restored`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub manager: RwSignal<PortalSession>,
    pub restored: RwSignal<bool>,
}

/// Session context provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext {
        manager: RwSignal::new(PortalSession::new(BrowserStorage)),
        restored: RwSignal::new(false),
    };
    provide_context(session);

    // Runs once, in the browser only.
    Effect::new(move || {
        if session.restored.get_untracked() {
            return;
        }
        session.manager.set(PortalSession::restore(BrowserStorage));
        session.restored.set(true);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lostective.css"/>
        <Title text="Lostective"/>

        <Router>
            <main class="portal">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                    <Route path=StaticSegment("") view=BrowsePage/>
                    <Route path=StaticSegment("browse") view=BrowsePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("report-lost") view=ReportLostPage/>
                    <Route path=StaticSegment("report-found") view=ReportFoundPage/>
                </Routes>
            </main>
        </Router>
    }
}
