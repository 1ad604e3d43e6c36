//! Claim dialog bound to one selected catalog item.
//!
//! DESIGN
//! ======
//! The dialog owns its form and its own `RequestScope`, so closing it (or
//! leaving the browse page) discards a submission still in flight. A failed
//! submission keeps the dialog open with the form intact; only a confirmed
//! claim closes it and hands the confirmation to the catalog.

use leptos::prelude::*;

use crate::net::types::Item;
use crate::state::claim::{ClaimForm, ClaimState, ClaimStatus};
use crate::util::scope::RequestScope;

/// Modal claim form. `on_close` receives the confirmation text on success.
#[component]
pub fn ClaimModal(item: Item, on_close: Callback<Option<String>>) -> impl IntoView {
    let state = RwSignal::new(ClaimState::default());
    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.close());
    }
    let title = format!("Claim \"{}\"", item.name);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        state.update(|s| started = s.begin_submit(&item.id));
        if !started {
            return;
        }
        let form = state.with_untracked(|s| s.form.clone());

        #[cfg(feature = "hydrate")]
        {
            let item = item.clone();
            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::fetch::FetchTransport;
                let Some(outcome) = scope.run(crate::state::claim::submit(&transport, &item, &form)).await else {
                    return;
                };
                let mut confirmation = None;
                state.update(|s| confirmation = s.apply_outcome(&outcome));
                if confirmation.is_some() {
                    on_close.run(confirmation);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&item, &scope, form);
        }
    };

    let field = move |read: fn(&ClaimForm) -> String, write: fn(&mut ClaimForm, String)| {
        (
            move || state.with(|s| read(&s.form)),
            move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                state.update(|s| write(&mut s.form, value));
            },
        )
    };
    let (name_value, on_name) = field(|f| f.name.clone(), |f, v| f.name = v);
    let (email_value, on_email) = field(|f| f.email.clone(), |f, v| f.email = v);
    let (phone_value, on_phone) = field(|f| f.phone.clone(), |f, v| f.phone = v);
    let (proof_value, on_proof) = field(|f| f.proof.clone(), |f, v| f.proof = v);

    let submitting = move || state.with(|s| s.status == ClaimStatus::Submitting);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(None)>
            <div class="dialog claim-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form class="claim-modal__form" on:submit=on_submit>
                    <input class="claim-modal__input" type="text" placeholder="Your Name" prop:value=name_value on:input=on_name/>
                    <input class="claim-modal__input" type="email" placeholder="Your Email" prop:value=email_value on:input=on_email/>
                    <input class="claim-modal__input" type="tel" placeholder="Phone Number" prop:value=phone_value on:input=on_phone/>
                    <textarea
                        class="claim-modal__input"
                        placeholder="Describe proof of ownership"
                        prop:value=proof_value
                        on:input=on_proof
                    ></textarea>
                    <Show when=move || state.with(|s| s.error().is_some())>
                        <p class="claim-modal__error">{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit" disabled=submitting>
                            {move || if submitting() { "Submitting..." } else { "Submit" }}
                        </button>
                        <button class="btn" type="button" on:click=move |_| on_close.run(None)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
