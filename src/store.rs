//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! One store per mounted gallery.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::GalleryError;
use crate::filter::{self, ALL_CATEGORIES};
use crate::models::{GalleryKind, Item};

/// Where the one-shot load stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// User-facing error text
    Failed(String),
}

/// Gallery view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Every loaded item; set once when the load completes
    pub items: Vec<Item>,
    /// Selected category, `"all"` for no filtering
    pub active_category: String,
    /// Normalized search query, empty for no filtering
    pub active_query: String,
    pub status: LoadStatus,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

// ========================
// Store Helper Functions
// ========================

/// Record a successful load
pub fn store_loaded(store: &GalleryStore, items: Vec<Item>) {
    store.items().set(items);
    store.status().set(LoadStatus::Ready);
}

/// Record a failed load
pub fn store_failed(store: &GalleryStore, message: String) {
    store.status().set(LoadStatus::Failed(message));
}

/// Record the outcome of the one-shot load. Returns the item count, or
/// the user-facing message shown in place of the grid.
pub fn store_apply_load(
    store: &GalleryStore,
    kind: GalleryKind,
    result: Result<Vec<Item>, GalleryError>,
) -> Result<usize, String> {
    match result {
        Ok(items) => {
            let count = items.len();
            store_loaded(store, items);
            Ok(count)
        }
        Err(e) => {
            log::error!("{} gallery failed to load: {}", kind.slug(), e);
            let message = e.user_message(kind);
            store_failed(store, message.clone());
            Err(message)
        }
    }
}

/// Select a category; returns false when it was already active
pub fn store_set_category(store: &GalleryStore, category: &str) -> bool {
    if store.active_category().with_untracked(|c| c == category) {
        return false;
    }
    store.active_category().set(category.to_string());
    true
}

/// Set the search query from raw input; returns false when unchanged
pub fn store_set_query(store: &GalleryStore, raw: &str) -> bool {
    let query = filter::normalize_query(raw);
    if store.active_query().with_untracked(|q| *q == query) {
        return false;
    }
    store.active_query().set(query);
    true
}

/// Items to show, always filtered from the full list
pub fn store_visible_items(store: &GalleryStore) -> Vec<Item> {
    let category = store.active_category().get();
    let query = store.active_query().get();
    store.items().with(|items| filter::apply(items, &category, &query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::item;

    fn loaded_store() -> GalleryStore {
        let store = Store::new(GalleryState::new());
        store_loaded(
            &store,
            vec![
                item(1, "Hillside House", "residential"),
                item(2, "Market Hall", "commercial"),
                item(3, "Lake Cabin", "residential"),
            ],
        );
        store
    }

    #[test]
    fn test_defaults() {
        let state = GalleryState::new();
        assert_eq!(state.active_category, "all");
        assert_eq!(state.active_query, "");
        assert_eq!(state.status, LoadStatus::Loading);
    }

    #[test]
    fn test_filters_always_start_from_full_list() {
        let owner = Owner::new();
        owner.set();
        let store = loaded_store();

        assert!(store_set_category(&store, "commercial"));
        assert_eq!(store_visible_items(&store).len(), 1);

        assert!(store_set_category(&store, "all"));
        assert_eq!(store_visible_items(&store).len(), 3);

        assert!(store_set_query(&store, "  CABIN "));
        assert_eq!(store.active_query().get_untracked(), "cabin");
        assert_eq!(store_visible_items(&store).len(), 1);

        assert!(!store_set_query(&store, "cabin"));
        assert!(store_set_query(&store, ""));
        assert_eq!(store_visible_items(&store).len(), 3);
        assert_eq!(store.items().with_untracked(|items| items.len()), 3);
    }

    #[test]
    fn test_failed_status() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(GalleryState::new());
        store_failed(&store, "Unable to load projects.".into());
        assert_eq!(
            store.status().get_untracked(),
            LoadStatus::Failed("Unable to load projects.".into())
        );
        assert!(store.items().with_untracked(|items| items.is_empty()));
    }

    #[test]
    fn test_http_500_shows_error_and_no_cards() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(GalleryState::new());
        let err = GalleryError::http("/data/projects.json", 500, "Internal Server Error");

        let outcome = store_apply_load(&store, GalleryKind::Projects, Err(err));

        let message = "Unable to load projects. Please try again later.".to_string();
        assert_eq!(outcome, Err(message.clone()));
        assert_eq!(store.status().get_untracked(), LoadStatus::Failed(message));
        assert!(store.items().with_untracked(|items| items.is_empty()));
        assert!(store_visible_items(&store).is_empty());
    }

    #[test]
    fn test_successful_load_reports_count() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(GalleryState::new());
        let items = vec![item(1, "Hillside House", "residential"), item(2, "Market Hall", "commercial")];

        assert_eq!(store_apply_load(&store, GalleryKind::Projects, Ok(items)), Ok(2));
        assert_eq!(store.status().get_untracked(), LoadStatus::Ready);
        assert_eq!(store_visible_items(&store).len(), 2);
    }
}
