//! Filter Bar Component
//!
//! Category tabs built from the loaded data. Arrow keys move focus
//! between tabs, Enter/Space (native button) selects.

use leptos::prelude::*;
use leptos_a11y::{make_on_roving_keydown, Orientation};

use crate::context::use_gallery;
use crate::filter;
use crate::store::GalleryStateStoreFields;
use crate::view::category_label;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_gallery();
    let categories = Memo::new(move |_| ctx.store.items().with(|items| filter::categories(items)));

    view! {
        <div
            class="gallery-filters"
            role="tablist"
            aria-label=format!("Filter {} by category", ctx.kind.noun())
        >
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| view! { <FilterButton category=category /> }
            />
        </div>
    }
}

#[component]
fn FilterButton(category: String) -> impl IntoView {
    let ctx = use_gallery();
    let is_active = {
        let category = category.clone();
        Memo::new(move |_| ctx.store.active_category().with(|active| *active == category))
    };
    let on_keydown = make_on_roving_keydown(".gallery-filters", ".filter-btn", Orientation::Horizontal);
    let label = category_label(&category);
    let value = category.clone();

    view! {
        <button
            type="button"
            role="tab"
            class=move || if is_active.get() { "filter-btn active" } else { "filter-btn" }
            data-filter=category
            aria-selected=move || if is_active.get() { "true" } else { "false" }
            on:click=move |_| ctx.set_category(&value)
            on:keydown=on_keydown
        >
            {label}
        </button>
    }
}
