//! Gallery Context
//!
//! Per-gallery handles provided via the Leptos Context API. The modal
//! container is owned here: cards request transitions, only these
//! methods change it.

use leptos::html;
use leptos::prelude::*;

use crate::config::GalleryConfig;
use crate::modal_state::{CloseReason, ModalState};
use crate::models::{GalleryKind, ItemId};
use crate::notifier::{Politeness, SharedNotifier};
use crate::store::{self, GalleryStateStoreFields, GalleryStore};
use crate::view::{self, ModalView};

#[derive(Clone, Copy)]
pub struct GalleryContext {
    pub kind: GalleryKind,
    pub store: GalleryStore,
    config: StoredValue<GalleryConfig>,
    notifier: StoredValue<SharedNotifier>,
    modal: RwSignal<ModalState<web_sys::HtmlElement>, LocalStorage>,
    /// Dialog close button, focused when the modal opens
    pub close_button: NodeRef<html::Button>,
}

impl GalleryContext {
    pub fn new(kind: GalleryKind, config: GalleryConfig, notifier: SharedNotifier) -> Self {
        Self {
            kind,
            store: GalleryStore::new(store::GalleryState::new()),
            config: StoredValue::new(config),
            notifier: StoredValue::new(notifier),
            modal: RwSignal::new_local(ModalState::Closed),
            close_button: NodeRef::new(),
        }
    }

    pub fn config(&self) -> GalleryConfig {
        self.config.get_value()
    }

    pub fn announce(&self, message: &str, politeness: Politeness) {
        self.notifier.with_value(|n| n.announce(message, politeness));
    }

    // ========================
    // Filter / search
    // ========================

    pub fn set_category(&self, category: &str) {
        if store::store_set_category(&self.store, category) {
            log::debug!("{} category -> {}", self.kind.slug(), category);
            self.announce_results();
        }
    }

    pub fn set_query(&self, raw: &str) {
        if store::store_set_query(&self.store, raw) {
            log::debug!("{} query -> {:?}", self.kind.slug(), self.store.active_query().get_untracked());
            self.announce_results();
        }
    }

    fn announce_results(&self) {
        let shown = untrack(|| store::store_visible_items(&self.store).len());
        let total = self.store.items().with_untracked(Vec::len);
        self.announce(&view::results_message(self.kind, shown, total), Politeness::Polite);
    }

    // ========================
    // Modal
    // ========================

    pub fn is_open(&self) -> bool {
        self.modal.with(ModalState::is_open)
    }

    pub fn image_index(&self) -> usize {
        self.modal.with(|m| m.image_index().unwrap_or(0))
    }

    /// View model of the open item, if any
    pub fn modal_view(&self) -> Option<ModalView> {
        let id = self.modal.with(|m| m.open_item_id().cloned())?;
        let config = self.config.get_value();
        self.store.items().with(|items| {
            items
                .iter()
                .find(|item| item.id == id)
                .map(|item| view::modal_view(self.kind, &config, item))
        })
    }

    /// Show `id` in the modal, replacing whatever is open
    pub fn open_item(&self, id: &ItemId, trigger: Option<web_sys::HtmlElement>) {
        let found = self.store.items().with_untracked(|items| {
            items
                .iter()
                .find(|item| &item.id == id)
                .map(|item| (item.images.len(), item.title.clone()))
        });
        let Some((image_count, title)) = found else {
            log::warn!("{} item {} not found", self.kind.slug(), id);
            return;
        };

        self.modal.update(|m| m.open(id.clone(), image_count, trigger));
        set_page_modal_active(true);
        log::debug!("opened {} item {}", self.kind.slug(), id);
        self.announce(&format!("Opened {}", title), Politeness::Polite);

        let close_button = self.close_button;
        request_animation_frame(move || {
            if let Some(button) = close_button.get_untracked() {
                let _ = button.focus();
            }
        });
    }

    /// The only close path: button, backdrop, Escape and call-to-action
    pub fn close_modal(&self, reason: CloseReason) {
        if !self.modal.with_untracked(ModalState::is_open) {
            return;
        }
        let mut restore = None;
        self.modal.update(|m| restore = m.close());
        set_page_modal_active(false);
        log::debug!("closed {} modal ({:?})", self.kind.slug(), reason);
        if let Some(el) = restore {
            leptos_a11y::focus_element(&el);
        }
    }

    pub fn select_image(&self, index: usize) {
        self.modal.update(|m| {
            m.select_image(index);
        });
    }

    pub fn next_image(&self) {
        self.modal.update(|m| {
            m.next_image();
        });
    }

    pub fn previous_image(&self) {
        self.modal.update(|m| {
            m.previous_image();
        });
    }
}

/// Toggle `body.modal-open`, which suppresses background scroll
fn set_page_modal_active(active: bool) {
    if let Some(body) = document().body() {
        let _ = body.class_list().toggle_with_force("modal-open", active);
    }
}

pub fn use_gallery() -> GalleryContext {
    expect_context::<GalleryContext>()
}
