//! UI Components
//!
//! Leptos components making up one gallery.

mod filter_bar;
mod gallery;
mod gallery_card;
mod gallery_grid;
mod gallery_modal;
mod lazy_image;
mod meta_list;
mod search_box;

pub use filter_bar::FilterBar;
pub use gallery::Gallery;
pub use gallery_card::GalleryCard;
pub use gallery_grid::GalleryGrid;
pub use gallery_modal::GalleryModal;
pub use lazy_image::LazyImage;
pub use meta_list::MetaList;
pub use search_box::SearchBox;
