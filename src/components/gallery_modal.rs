//! Gallery Modal Component
//!
//! One dialog per gallery, rendered while an item is open. Focus is
//! trapped inside; Escape, the close button, the backdrop and the
//! call-to-action all close it through `GalleryContext::close_modal`.

use leptos::ev;
use leptos::prelude::*;
use leptos_a11y::make_on_trap_keydown;

use crate::components::lazy_image::substitute_fallback;
use crate::components::MetaList;
use crate::context::use_gallery;
use crate::modal_state::CloseReason;
use crate::view::{self, BodyView, GalleryView, ModalFooter, ModalView};

#[component]
pub fn GalleryModal() -> impl IntoView {
    let ctx = use_gallery();
    // Memo so image changes do not rebuild the dialog
    let is_open = Memo::new(move |_| ctx.is_open());

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_modal(CloseReason::Escape);
        }
    });
    on_cleanup(move || handle.remove());

    move || is_open.get().then(|| view! { <ModalDialog /> })
}

#[component]
fn ModalDialog() -> impl IntoView {
    let ctx = use_gallery();
    let slug = ctx.kind.slug();
    let title_id = view::modal_title_id(ctx.kind);
    let content_title_id = title_id.clone();
    let modal_view = Memo::new(move |_| ctx.modal_view());
    let trap = make_on_trap_keydown();

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Tab" => trap(ev),
        "ArrowRight" => ctx.next_image(),
        "ArrowLeft" => ctx.previous_image(),
        _ => {}
    };

    view! {
        <div class=format!("gallery-modal {}-modal open", slug)>
            <div class="modal-overlay" on:click=move |_| ctx.close_modal(CloseReason::Backdrop)></div>
            <div
                class="modal-container"
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id
                on:keydown=on_keydown
            >
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close modal"
                    node_ref=ctx.close_button
                    on:click=move |_| ctx.close_modal(CloseReason::Button)
                >
                    <i class="fas fa-times" aria-hidden="true"></i>
                </button>
                <div class="modal-content">
                    {move || {
                        modal_view
                            .get()
                            .map(|view| view! { <ModalContent view=view title_id=content_title_id.clone() /> })
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ModalContent(view: ModalView, title_id: String) -> impl IntoView {
    let ctx = use_gallery();
    let ModalView { title, meta, gallery, body, features, tags, footer, .. } = view;
    let share_title = title.clone();

    view! {
        <article class=format!("{}-modal-content", ctx.kind.slug())>
            <header class="modal-header">
                <h2 id=title_id class="modal-title">{title}</h2>
                <MetaList entries=meta class="modal-meta" />
            </header>
            <div class="modal-body">
                {gallery.map(|gallery| view! { <ImageGallery gallery=gallery /> })}
                <div class="modal-details">
                    {body_view(body)}
                    {(!features.is_empty()).then(|| view! {
                        <div class="project-features">
                            <h3>"Key Features"</h3>
                            <ul>
                                {features
                                    .into_iter()
                                    .map(|feature| view! {
                                        <li>
                                            <i class="fas fa-check-circle" aria-hidden="true"></i>
                                            " "
                                            {feature}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}
                    {(!tags.is_empty()).then(|| view! {
                        <div class="blog-tags">
                            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                        </div>
                    })}
                </div>
            </div>
            {footer_view(footer, &share_title)}
        </article>
    }
}

fn body_view(body: BodyView) -> AnyView {
    match body {
        BodyView::Paragraphs(paragraphs) => view! {
            <div class="modal-description">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
            </div>
        }
        .into_any(),
        BodyView::Html(html) => view! { <div class="modal-description article-body" inner_html=html></div> }
            .into_any(),
    }
}

fn footer_view(footer: ModalFooter, title: &str) -> AnyView {
    let ctx = use_gallery();
    match footer {
        ModalFooter::Contact { label, href } => view! {
            <footer class="modal-footer">
                <a href=href class="cta-button modal-cta" on:click=move |_| ctx.close_modal(CloseReason::CallToAction)>
                    {label}
                </a>
            </footer>
        }
        .into_any(),
        ModalFooter::Share { related } => {
            let page_url = window().location().href().unwrap_or_default();
            let links = view::share_links(&page_url, title);
            view! {
                <footer class="modal-footer">
                    <div class="blog-share">
                        <h4>"Share This Article"</h4>
                        <div class="share-buttons">
                            {links
                                .into_iter()
                                .map(|link| view! {
                                    <a
                                        href=link.href
                                        class="share-btn"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                    >
                                        <i class=link.icon aria-hidden="true"></i>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="related-articles">
                        <h4>"Related Articles"</h4>
                        <p>{related}</p>
                    </div>
                </footer>
            }
            .into_any()
        }
    }
}

#[component]
fn ImageGallery(gallery: GalleryView) -> impl IntoView {
    let ctx = use_gallery();
    let fallback = ctx.config().fallback_image;
    let navigable = gallery.has_navigation();
    let index = Memo::new(move |_| ctx.image_index());
    let images = StoredValue::new(gallery.images);

    let current = move || images.with_value(|imgs| imgs.get(index.get()).cloned().unwrap_or_default());
    let main_fallback = fallback.clone();

    view! {
        <div class="modal-gallery">
            <div class="gallery-main">
                <img
                    class="main-image"
                    src=move || current().src
                    alt=move || current().alt
                    on:error=move |ev| substitute_fallback(&ev, &main_fallback)
                />
                {navigable.then(|| view! {
                    <button type="button" class="gallery-nav prev" aria-label="Previous image" on:click=move |_| ctx.previous_image()>
                        <i class="fas fa-chevron-left" aria-hidden="true"></i>
                    </button>
                    <button type="button" class="gallery-nav next" aria-label="Next image" on:click=move |_| ctx.next_image()>
                        <i class="fas fa-chevron-right" aria-hidden="true"></i>
                    </button>
                })}
            </div>
            {navigable.then(|| view! {
                <div class="gallery-thumbnails" role="group" aria-label="Image thumbnails">
                    {images.with_value(|imgs| {
                        imgs.iter()
                            .cloned()
                            .enumerate()
                            .map(|(i, img)| {
                                let fallback = fallback.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=move || if index.get() == i { "thumbnail active" } else { "thumbnail" }
                                        aria-label=format!("Show image {}", i + 1)
                                        aria-current=move || (index.get() == i).then_some("true")
                                        on:click=move |_| ctx.select_image(i)
                                    >
                                        <img
                                            src=img.src
                                            alt=img.alt
                                            loading="lazy"
                                            on:error=move |ev| substitute_fallback(&ev, &fallback)
                                        />
                                    </button>
                                }
                            })
                            .collect_view()
                    })}
                </div>
            })}
        </div>
    }
}
