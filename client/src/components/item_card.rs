//! Catalog card for a single lost or found item.

use leptos::prelude::*;

use crate::net::types::{Item, ItemStatus};

/// A clickable card; selecting it opens the claim dialog.
#[component]
pub fn ItemCard(item: Item, on_select: Callback<()>) -> impl IntoView {
    let badge_class = match item.status {
        ItemStatus::Lost => "item-card__badge item-card__badge--lost",
        ItemStatus::Found => "item-card__badge item-card__badge--found",
    };
    let preview = item.description_preview();
    let location = item.location_label().to_owned();
    let media = match item.image_url.clone() {
        Some(src) => view! { <img class="item-card__image" src=src alt=item.name.clone()/> }.into_any(),
        None => view! { <div class="item-card__placeholder">"No Image"</div> }.into_any(),
    };

    view! {
        <div class="item-card" on:click=move |_| on_select.run(())>
            <div class="item-card__media">
                {media}
                <span class=badge_class>{item.status.as_str()}</span>
            </div>
            <div class="item-card__body">
                <h3 class="item-card__name">{item.name}</h3>
                <p class="item-card__description">{preview}</p>
                <p class="item-card__meta">"📍 " {location}</p>
                <p class="item-card__meta">"📅 " {item.date}</p>
            </div>
        </div>
    }
}
