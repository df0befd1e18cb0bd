//! Gallery Card Component
//!
//! The whole card is one keyboard-operable control that opens the
//! modal. Arrow keys move focus across the grid.

use leptos::prelude::*;
use leptos_a11y::{activate_on_key, rove_focus, Orientation};
use wasm_bindgen::JsCast;

use crate::components::{LazyImage, MetaList};
use crate::context::use_gallery;
use crate::view::CardView;

/// Element the event was bound to, used to restore focus on close
fn event_trigger(ev: &web_sys::Event) -> Option<web_sys::HtmlElement> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
}

#[component]
pub fn GalleryCard(card: CardView) -> impl IntoView {
    let ctx = use_gallery();
    let kind = ctx.kind;
    let click_id = card.id.clone();
    let key_id = card.id.clone();

    view! {
        <article
            class=format!("gallery-card {}-card {}", kind.slug(), card.category)
            data-item-id=card.id.to_string()
            data-category=card.category.clone()
            tabindex="0"
            role="button"
            aria-label=card.action_label
            style=format!("animation-delay: {}ms", card.reveal_delay_ms)
            on:click=move |ev| ctx.open_item(&click_id, event_trigger(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                let activated = activate_on_key(&ev, || ctx.open_item(&key_id, event_trigger(&ev)));
                if !activated {
                    rove_focus(&ev, ".gallery-grid", ".gallery-card", Orientation::Grid);
                }
            }
        >
            <div class="card-image">
                <LazyImage src=card.cover alt=card.alt />
                <span class="card-category">{card.category_label}</span>
            </div>
            <div class="card-info">
                <h3 class="card-title">{card.title}</h3>
                <p class="card-summary">{card.summary}</p>
                <MetaList entries=card.meta class="card-meta" />
                <span class="card-action" aria-hidden="true">
                    {card.action_text}
                    " "
                    <i class="fas fa-arrow-right"></i>
                </span>
            </div>
        </article>
    }
}
