//! Signup page: account creation followed by a timed redirect to login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signup never authenticates. On success the page shows a confirmation,
//! waits `REDIRECT_DELAY`, then moves to `/login`. The delay runs inside
//! the page's `RequestScope`, so leaving early cancels the redirect.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;
use crate::util::guard::AppRoute;
use crate::util::scope::RequestScope;

pub const SIGNUP_SUCCESS: &str = "Account created successfully! Redirecting...";
pub const SIGNUP_NETWORK_ERROR: &str = "Unable to connect to backend.";
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);
const MISSING_FIELDS: &str = "Please fill in all fields.";

fn validate_signup_input(form: &SignupRequest) -> Result<SignupRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: form.password.clone() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(SignupRequest::default());
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
        let request = match form.with_untracked(validate_signup_input) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let scope = scope.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::fetch::FetchTransport;
                let Some(outcome) = scope.run(crate::net::api::signup(&transport, &request)).await else {
                    return;
                };
                match outcome {
                    Ok(()) => {
                        info.set(SIGNUP_SUCCESS.to_owned());
                        let delay = gloo_timers::future::sleep(REDIRECT_DELAY);
                        if scope.run(delay).await.is_some() {
                            navigate(AppRoute::Login.path(), leptos_router::NavigateOptions::default());
                        }
                    }
                    Err(e) => {
                        busy.set(false);
                        info.set(e.display_with(SIGNUP_NETWORK_ERROR));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &scope, &navigate);
        }
    };

    let field = move |read: fn(&SignupRequest) -> String, write: fn(&mut SignupRequest, String)| {
        (
            move || form.with(read),
            move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                form.update(|f| write(f, value));
            },
        )
    };
    let (name_value, on_name) = field(|f| f.name.clone(), |f, v| f.name = v);
    let (email_value, on_email) = field(|f| f.email.clone(), |f, v| f.email = v);
    let (password_value, on_password) = field(|f| f.password.clone(), |f, v| f.password = v);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lostective"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input class="login-input" type="text" placeholder="Full Name" prop:value=name_value on:input=on_name/>
                    <input class="login-input" type="email" placeholder="Email" prop:value=email_value on:input=on_email/>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=password_value
                        on:input=on_password
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>"Login"</a>
                </p>
            </div>
        </div>
    }
}
