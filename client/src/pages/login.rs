//! Login page: email + password against the portal backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Success hands the token to the shared `SessionManager` and navigates to
//! the dashboard. Failures stay on the page as a status line; the session
//! is never touched unless the backend issued a token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_session;
use crate::net::types::Credentials;
use crate::util::guard::AppRoute;
use crate::util::scope::RequestScope;

pub const LOGIN_NETWORK_ERROR: &str = "Something went wrong. Please try again.";
const MISSING_CREDENTIALS: &str = "Enter both email and password.";

/// Both fields must be present before a request is made. The email is trimmed.
fn validate_login_input(form: &Credentials) -> Result<Credentials, &'static str> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials { email: email.to_owned(), password: form.password.clone() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(Credentials::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.close());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match form.with_untracked(validate_login_input) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let scope = scope.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::fetch::FetchTransport;
                let mut manager = session.manager.get_untracked();
                let Some(outcome) = scope.run(manager.login(&transport, &credentials)).await else {
                    return;
                };
                busy.set(false);
                match outcome {
                    Ok(()) => {
                        session.manager.set(manager);
                        navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                    }
                    Err(e) => info.set(e.display_with(LOGIN_NETWORK_ERROR)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &scope, &navigate, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lostective"</h1>
                <p class="login-card__subtitle">"Login"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href=AppRoute::Signup.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
