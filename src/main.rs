//! Studio Galleries Entry Point
//!
//! Mounts a gallery into each `[data-gallery="projects"|"blog"]` host
//! found on the page. Pages without a host are left alone.

mod components;
mod config;
mod context;
mod debounce;
mod error;
mod filter;
mod loader;
mod logging;
mod markdown;
mod modal_state;
mod models;
mod notifier;
mod store;
mod view;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use components::Gallery;
use config::GalleryConfig;
use models::GalleryKind;
use notifier::SharedNotifier;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());

    let notifier = notifier::live_region_notifier();
    for kind in GalleryKind::ALL {
        mount_gallery(kind, notifier.clone());
    }
}

fn mount_gallery(kind: GalleryKind, notifier: SharedNotifier) {
    let selector = format!("[data-gallery=\"{}\"]", kind.slug());
    let host = document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(host) = host else {
        log::info!("no {} gallery on this page", kind.slug());
        return;
    };

    let config = GalleryConfig::from_host(kind, &host);
    log::info!("mounting {} gallery from {}", kind.slug(), config.source_url);
    // Drop server-rendered fallback content
    host.set_inner_html("");
    leptos::mount::mount_to(host, move || view! { <Gallery kind=kind config=config notifier=notifier /> })
        .forget();
}
