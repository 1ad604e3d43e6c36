//! Browse page: searchable, filterable item catalog with claim entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public landing route at `/` and `/browse`. The catalog is requested once
//! per mount through a `RequestScope` that closes on unmount, so a late
//! response never lands in a disposed page.

use leptos::prelude::*;

use crate::components::claim_modal::ClaimModal;
use crate::components::item_card::ItemCard;
use crate::state::catalog::{CatalogState, StatusFilter};
use crate::util::scope::RequestScope;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.close());
    }

    let mut start = false;
    catalog.update(|c| start = c.begin_load());
    #[cfg(feature = "hydrate")]
    {
        if start {
            leptos::task::spawn_local(async move {
                let transport = crate::net::fetch::FetchTransport;
                if let Some(outcome) = scope.run(crate::net::api::fetch_items(&transport)).await {
                    catalog.update(|c| c.apply_loaded(outcome));
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (start, scope);

    let tabs = StatusFilter::TABS
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="browse-page__tab"
                    class:browse-page__tab--active=move || catalog.with(|c| c.filter == tab)
                    on:click=move |_| catalog.update(|c| c.set_status_filter(tab))
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="browse-page">
            <section class="browse-page__hero">
                <h1>"Lostective"</h1>
                <p class="browse-page__tagline">
                    "Your University Lost & Found Portal. Help reunite lost items with their owners."
                </p>
                <input
                    class="browse-page__search"
                    type="text"
                    placeholder="Search for items..."
                    prop:value=move || catalog.with(|c| c.search.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        catalog.update(|c| c.set_search(text));
                    }
                />
                <nav class="browse-page__nav">
                    <a class="btn" href="/login">"Login"</a>
                    <a class="btn" href="/signup">"Sign Up"</a>
                    <a class="btn btn--primary" href="/dashboard">"Dashboard"</a>
                </nav>
            </section>

            <div class="browse-page__tabs">{tabs}</div>

            <Show when=move || catalog.with(|c| c.notice.is_some())>
                <p class="browse-page__notice">{move || catalog.with(|c| c.notice.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !catalog.with(|c| c.loading)
                fallback=|| view! { <p class="browse-page__status">"Loading items..."</p> }
            >
                <div class="browse-page__grid">
                    {move || {
                        catalog
                            .with(CatalogState::visible_items)
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                let on_select = Callback::new(move |()| {
                                    catalog.update(|c| {
                                        c.select(&id);
                                    });
                                });
                                view! { <ItemCard item=item on_select=on_select/> }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            {move || {
                catalog
                    .with(|c| c.claiming.clone())
                    .map(|item| {
                        let on_close = Callback::new(move |notice: Option<String>| {
                            catalog.update(|c| c.close_claim(notice));
                        });
                        view! { <ClaimModal item=item on_close=on_close/> }
                    })
            }}
        </div>
    }
}
