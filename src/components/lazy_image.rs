//! Lazy Image Component
//!
//! Sets `src` once the image nears the viewport. A failed load swaps
//! in the fallback image once and shows "Image not available".

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_gallery;
use crate::error::GalleryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageState {
    Pending,
    Loaded,
    Failed,
}

type VisibilityCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Observer plus the callback it calls; the callback must outlive the observer
struct Visibility {
    observer: web_sys::IntersectionObserver,
    _callback: VisibilityCallback,
}

impl Visibility {
    /// Call `on_visible` the first time `el` intersects, then stop observing
    fn observe_once(
        el: &web_sys::Element,
        root_margin: &str,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = VisibilityCallback::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if visible {
                    observer.disconnect();
                    on_visible();
                }
            },
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(el);
        Ok(Self { observer, _callback: callback })
    }
}

/// Replace a broken `<img>` with `fallback`; a broken fallback is left alone
pub fn substitute_fallback(ev: &web_sys::Event, fallback: &str) {
    let Some(img) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    if img.get_attribute("src").as_deref() == Some(fallback) {
        return;
    }
    log::warn!("{}", GalleryError::ImageLoad { src: img.src() });
    img.set_src(fallback);
}

#[component]
pub fn LazyImage(#[prop(into)] src: String, #[prop(into)] alt: String) -> impl IntoView {
    let config = use_gallery().config();
    let img_ref = NodeRef::<html::Img>::new();
    let (current_src, set_current_src) = signal(None::<String>);
    let (state, set_state) = signal(ImageState::Pending);
    let visibility = StoredValue::new_local(None::<Visibility>);

    let root_margin = config.lazy_root_margin.clone();
    let threshold = config.lazy_threshold;
    Effect::new(move |_| {
        let Some(img) = img_ref.get() else { return };
        if visibility.with_value(Option::is_some) {
            return;
        }
        let target = src.clone();
        let on_visible = move || set_current_src.set(Some(target.clone()));
        match Visibility::observe_once(&img, &root_margin, threshold, on_visible) {
            Ok(observer) => visibility.set_value(Some(observer)),
            Err(e) => {
                // No IntersectionObserver: load right away
                log::debug!("lazy loading unavailable: {:?}", e);
                set_current_src.set(Some(src.clone()));
            }
        }
    });

    on_cleanup(move || {
        let _ = visibility.try_update_value(|v| {
            if let Some(v) = v.take() {
                v.observer.disconnect();
            }
        });
    });

    let fallback = config.fallback_image;
    let on_error = move |_| {
        if state.get_untracked() == ImageState::Failed {
            return;
        }
        log::warn!(
            "{}",
            GalleryError::ImageLoad { src: current_src.get_untracked().unwrap_or_default() }
        );
        set_state.set(ImageState::Failed);
        set_current_src.set(Some(fallback.clone()));
    };

    view! {
        <div class="lazy-image">
            <img
                node_ref=img_ref
                class=move || match state.get() {
                    ImageState::Pending => "lazy",
                    ImageState::Loaded => "lazy loaded",
                    ImageState::Failed => "lazy error",
                }
                src=move || current_src.get()
                alt=alt
                on:load=move |_| {
                    if state.get_untracked() == ImageState::Pending {
                        set_state.set(ImageState::Loaded);
                    }
                }
                on:error=on_error
            />
            <Show when=move || state.get() != ImageState::Loaded>
                <div class="image-placeholder">
                    {move || if state.get() == ImageState::Failed {
                        view! { <div class="error-placeholder">"Image not available"</div> }.into_any()
                    } else {
                        view! { <div class="skeleton-loader"></div> }.into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
