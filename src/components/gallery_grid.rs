//! Gallery Grid Component
//!
//! Loading indicator, skeleton placeholders for slow loads, the error
//! message, or the visible cards.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::GalleryCard;
use crate::context::use_gallery;
use crate::store::{store_visible_items, GalleryStateStoreFields, LoadStatus};
use crate::view::{self, GridView};

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let ctx = use_gallery();
    let kind = ctx.kind;
    let config = ctx.config();
    let skeleton_count = config.skeleton_count;

    // Skeletons replace the spinner only if loading is still pending after the delay
    let (show_skeletons, set_show_skeletons) = signal(false);
    let delay = config.skeleton_delay_ms;
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        let pending = ctx
            .store
            .status()
            .try_with_untracked(|status| *status == LoadStatus::Loading)
            .unwrap_or(false);
        if pending {
            set_show_skeletons.set(true);
        }
    });

    let grid = Memo::new(move |_| view::grid_view(kind, &config, &store_visible_items(&ctx.store)));

    view! {
        <div
            class=format!("gallery-grid {}-grid", kind.slug())
            aria-busy=move || ctx.store.status().with(|s| (*s == LoadStatus::Loading).to_string())
        >
            {move || match ctx.store.status().get() {
                LoadStatus::Loading if show_skeletons.get() => {
                    (0..skeleton_count).map(|_| view! { <SkeletonCard /> }).collect_view().into_any()
                }
                LoadStatus::Loading => view! {
                    <div class="content-loading">
                        <div class="loading-spinner large"></div>
                        <div class="loading-message">{format!("Loading {}...", kind.noun())}</div>
                    </div>
                }
                .into_any(),
                LoadStatus::Failed(message) => view! {
                    <p class="error-message" role="alert">{message}</p>
                }
                .into_any(),
                LoadStatus::Ready => match grid.get() {
                    GridView::NoResults { message } => view! {
                        <p class="no-results">{message}</p>
                    }
                    .into_any(),
                    GridView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <GalleryCard card=card /> })
                        .collect_view()
                        .into_any(),
                },
            }}
        </div>
    }
}

#[component]
fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="gallery-card skeleton" aria-hidden="true">
            <div class="card-image skeleton-loader"></div>
            <div class="card-info">
                <div class="skeleton-line title"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        </div>
    }
}
