//! Search Box Component
//!
//! Typing applies the query after a quiet period; Enter or the search
//! button applies it at once.

use leptos::prelude::*;

use crate::context::use_gallery;
use crate::debounce::Debouncer;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_gallery();
    let debouncer = Debouncer::new(ctx.config().debounce_ms);
    let (input, set_input) = signal(String::new());
    let input_id = format!("{}-search", ctx.kind.slug());
    let label_for = input_id.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if debouncer.is_pending() {
            log::debug!("search submitted before debounce settled");
        }
        debouncer.cancel();
        ctx.set_query(&input.get_untracked());
    };

    view! {
        <form class="gallery-search" role="search" on:submit=on_submit>
            <label class="sr-only" for=label_for>
                {format!("Search {}", ctx.kind.noun())}
            </label>
            <input
                id=input_id
                type="search"
                autocomplete="off"
                placeholder=format!("Search {}...", ctx.kind.noun())
                prop:value=move || input.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_input.set(value.clone());
                    debouncer.schedule(move || ctx.set_query(&value));
                }
            />
            <button type="submit" class="search-btn" aria-label="Search">
                <i class="fas fa-search" aria-hidden="true"></i>
            </button>
        </form>
    }
}
