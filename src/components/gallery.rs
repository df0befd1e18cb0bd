//! Gallery Component
//!
//! One self-contained gallery: filter bar, optional search, card grid
//! and item modal, sharing a `GalleryContext`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FilterBar, GalleryGrid, GalleryModal, SearchBox};
use crate::config::GalleryConfig;
use crate::context::GalleryContext;
use crate::loader;
use crate::models::GalleryKind;
use crate::notifier::{Politeness, SharedNotifier};
use crate::store::store_apply_load;
use crate::view;

#[component]
pub fn Gallery(kind: GalleryKind, config: GalleryConfig, notifier: SharedNotifier) -> impl IntoView {
    let source_url = config.source_url.clone();
    let search_enabled = config.search_enabled;

    let ctx = GalleryContext::new(kind, config, notifier);
    provide_context(ctx);

    // Single load per mount; filters stay inert until it resolves
    spawn_local(async move {
        let result = loader::load(kind, &source_url).await;
        match store_apply_load(&ctx.store, kind, result) {
            Ok(count) => ctx.announce(&view::loaded_message(kind, count), Politeness::Polite),
            Err(message) => ctx.announce(&message, Politeness::Assertive),
        }
    });

    view! {
        <section class=format!("gallery gallery-{}", kind.slug())>
            <div class="gallery-controls">
                <FilterBar />
                {search_enabled.then(|| view! { <SearchBox /> })}
            </div>
            <GalleryGrid />
            <GalleryModal />
        </section>
    }
}
