//! Report pages for lost and found items.
//!
//! SYSTEM CONTEXT
//! ==============
//! One form component serves both routes; `ReportKind` selects the endpoint,
//! the copy, the extra lost-only checkboxes and whether a photo is required.
//! The picked photo is read into memory when chosen, so submission itself
//! needs no further browser file access.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::prelude::*;

use crate::app::use_session;
use crate::components::protected::Protected;
use crate::state::report::{ReportForm, ReportKind, ReportStamp, ReportState};
use crate::util::guard::AppRoute;
use crate::util::scope::RequestScope;

/// Visible text for one report form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FormCopy {
    heading: &'static str,
    item_label: &'static str,
    item_placeholder: &'static str,
    location_label: &'static str,
    location_placeholder: &'static str,
    description_placeholder: &'static str,
    photo_label: &'static str,
    submit_label: &'static str,
}

fn form_copy(kind: ReportKind) -> FormCopy {
    match kind {
        ReportKind::Lost => FormCopy {
            heading: "Report a Lost Item",
            item_label: "What did you lose?",
            item_placeholder: "e.g., Black leather wallet",
            location_label: "Where did you last see it?",
            location_placeholder: "e.g., Library second floor",
            description_placeholder: "Add details like brand, color, or identifying marks.",
            photo_label: "Upload a Photo (optional)",
            submit_label: "Submit Lost Report",
        },
        ReportKind::Found => FormCopy {
            heading: "Report a Found Item",
            item_label: "What did you find?",
            item_placeholder: "e.g., Blue backpack",
            location_label: "Where did you find it?",
            location_placeholder: "e.g., On a bench outside the cafeteria",
            description_placeholder: "Describe the item and its contents if applicable.",
            photo_label: "Upload a Photo",
            submit_label: "Submit Found Report",
        },
    }
}

#[component]
pub fn ReportLostPage() -> impl IntoView {
    view! {
        <Protected route=AppRoute::ReportLost>
            <ReportFormView kind=ReportKind::Lost/>
        </Protected>
    }
}

#[component]
pub fn ReportFoundPage() -> impl IntoView {
    view! {
        <Protected route=AppRoute::ReportFound>
            <ReportFormView kind=ReportKind::Found/>
        </Protected>
    }
}

#[component]
fn ReportFormView(kind: ReportKind) -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(ReportState::new(kind));
    let file_input = NodeRef::<leptos::html::Input>::new();
    let copy = form_copy(kind);
    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.close());
    }

    let on_submit = {
        let scope = scope.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let token = session.manager.with_untracked(|m| m.token().map(str::to_owned));
            let mut started = false;
            state.update(|s| started = s.begin_submit(token.as_deref()));
            if !started {
                return;
            }
            let form = state.with_untracked(|s| s.form.clone());
            let stamp = ReportStamp::now();

            #[cfg(feature = "hydrate")]
            {
                let scope = scope.clone();
                leptos::task::spawn_local(async move {
                    let transport = crate::net::fetch::FetchTransport;
                    let submission =
                        crate::state::report::submit(&transport, kind, token.as_deref(), &form, &stamp);
                    let Some(outcome) = scope.run(submission).await else {
                        return;
                    };
                    if outcome.is_ok()
                        && let Some(input) = file_input.get_untracked()
                    {
                        input.set_value("");
                    }
                    state.update(|s| s.apply_outcome(&outcome));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&scope, form, token, stamp);
            }
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                state.update(|s| s.form.image = None);
                return;
            };
            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                match scope.run(crate::net::fetch::read_image(file)).await {
                    Some(Ok(upload)) => state.update(|s| s.form.image = Some(upload)),
                    Some(Err(e)) => {
                        log::warn!("could not read picked image: {e}");
                        state.update(|s| s.form.image = None);
                    }
                    None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &scope);
        }
    };

    let text = move |read: fn(&ReportForm) -> String, write: fn(&mut ReportForm, String)| {
        (
            move || state.with(|s| read(&s.form)),
            move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                state.update(|s| write(&mut s.form, value));
            },
        )
    };
    let (name_value, on_name) = text(|f| f.item_name.clone(), |f, v| f.item_name = v);
    let (location_value, on_location) = text(|f| f.location.clone(), |f, v| f.location = v);
    let (description_value, on_description) = text(|f| f.description.clone(), |f, v| f.description = v);
    let (contact_value, on_contact) = text(|f| f.contact_info.clone(), |f, v| f.contact_info = v);

    let lost_options = (kind == ReportKind::Lost).then(|| {
        view! {
            <label class="report-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.form.priority)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|s| s.form.priority = checked);
                    }
                />
                "Mark as high priority"
            </label>
            <label class="report-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.form.wants_call)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        state.update(|s| s.form.wants_call = checked);
                    }
                />
                "Request a call if found"
            </label>
        }
    });

    view! {
        <div class="report-page">
            <form class="report-form" on:submit=on_submit>
                <h1>{copy.heading}</h1>
                <label class="report-form__label">{copy.item_label}</label>
                <input
                    class="report-form__input"
                    type="text"
                    placeholder=copy.item_placeholder
                    prop:value=name_value
                    on:input=on_name
                />
                <label class="report-form__label">{copy.location_label}</label>
                <input
                    class="report-form__input"
                    type="text"
                    placeholder=copy.location_placeholder
                    prop:value=location_value
                    on:input=on_location
                />
                <label class="report-form__label">"Description"</label>
                <textarea
                    class="report-form__input"
                    placeholder=copy.description_placeholder
                    prop:value=description_value
                    on:input=on_description
                ></textarea>
                <label class="report-form__label">"Contact Info"</label>
                <input
                    class="report-form__input"
                    type="text"
                    placeholder="Email or phone number"
                    prop:value=contact_value
                    on:input=on_contact
                />
                <label class="report-form__label">{copy.photo_label}</label>
                <input
                    class="report-form__file"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_file
                />
                {lost_options}
                <button
                    class="btn btn--primary report-form__submit"
                    type="submit"
                    disabled=move || state.with(|s| s.submitting)
                >
                    {copy.submit_label}
                </button>
                <Show when=move || state.with(|s| s.status.is_some())>
                    <p class="report-form__status">{move || state.with(|s| s.status.clone().unwrap_or_default())}</p>
                </Show>
                <a class="report-form__back" href=AppRoute::Dashboard.path()>"Back to Dashboard"</a>
            </form>
        </div>
    }
}
