//! Gallery View Models
//!
//! Pure mapping from `Item` to the structures the components render.
//! Everything here is testable without a DOM.

use chrono::{DateTime, NaiveDate};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::config::GalleryConfig;
use crate::filter::ALL_CATEGORIES;
use crate::markdown::render_article;
use crate::models::{GalleryKind, Item, ItemId};

// ========================
// Formatting helpers
// ========================

const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Resolve an image reference under `base`.
/// Absolute paths, URLs and data URIs are returned unchanged.
pub fn image_url(base: &str, name: &str) -> String {
    let name = name.trim();
    if name.starts_with('/') || name.contains("://") || name.starts_with("data:") {
        return name.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(name, PATH_ENCODE_SET)
    )
}

/// Display name for a category value
pub fn category_label(category: &str) -> String {
    match category {
        ALL_CATEGORIES => "All".to_string(),
        "design-tips" => "Design Tips".to_string(),
        "living-spaces" => "Living Spaces".to_string(),
        "architecture" => "Architecture".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok())
}

/// "May 2023" for projects, "May 15, 2023" for posts, "N/A" when missing.
/// Unparseable dates are shown as written.
pub fn format_date(kind: GalleryKind, raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    match parse_date(raw) {
        Some(date) => match kind {
            GalleryKind::Projects => date.format("%B %Y").to_string(),
            GalleryKind::Blog => date.format("%B %-d, %Y").to_string(),
        },
        None => raw.to_string(),
    }
}

// ========================
// Metadata
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    Category,
    Author,
    Date,
    Location,
}

impl MetaKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            MetaKind::Category => "fas fa-tag",
            MetaKind::Author => "fas fa-user",
            MetaKind::Date => "fas fa-calendar-alt",
            MetaKind::Location => "fas fa-map-marker-alt",
        }
    }

    pub fn class_suffix(self) -> &'static str {
        match self {
            MetaKind::Category => "category",
            MetaKind::Author => "author",
            MetaKind::Date => "date",
            MetaKind::Location => "location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub kind: MetaKind,
    pub text: String,
}

fn meta(kind: MetaKind, text: impl Into<String>) -> MetaEntry {
    MetaEntry { kind, text: text.into() }
}

fn card_meta(kind: GalleryKind, item: &Item) -> Vec<MetaEntry> {
    let date = meta(MetaKind::Date, format_date(kind, item.meta.date.as_deref()));
    let lead = match kind {
        GalleryKind::Projects => item.meta.location.as_ref().map(|l| meta(MetaKind::Location, l.as_str())),
        GalleryKind::Blog => item.meta.author.as_ref().map(|a| meta(MetaKind::Author, a.as_str())),
    };
    lead.into_iter().chain(std::iter::once(date)).collect()
}

fn modal_meta(kind: GalleryKind, item: &Item) -> Vec<MetaEntry> {
    let category = meta(MetaKind::Category, category_label(&item.category));
    let date = meta(MetaKind::Date, format_date(kind, item.meta.date.as_deref()));
    let mut out = Vec::new();
    match kind {
        GalleryKind::Projects => {
            out.push(category);
            if let Some(location) = &item.meta.location {
                out.push(meta(MetaKind::Location, location.as_str()));
            }
            out.push(date);
        }
        GalleryKind::Blog => {
            if let Some(author) = &item.meta.author {
                out.push(meta(MetaKind::Author, author.as_str()));
            }
            out.push(date);
            out.push(category);
        }
    }
    out
}

// ========================
// Grid
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: ItemId,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub category_label: String,
    pub cover: String,
    pub alt: String,
    pub meta: Vec<MetaEntry>,
    /// Accessible name of the card's activation control
    pub action_label: String,
    pub action_text: &'static str,
    pub reveal_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Cards(Vec<CardView>),
    NoResults { message: String },
}

pub fn card_view(kind: GalleryKind, config: &GalleryConfig, item: &Item, index: usize) -> CardView {
    let cover = item
        .cover()
        .map(|name| image_url(&config.image_base, name))
        .unwrap_or_else(|| config.fallback_image.clone());
    let (action_label, action_text) = match kind {
        GalleryKind::Projects => (format!("View project details: {}", item.title), "View Project"),
        GalleryKind::Blog => (format!("Read full article: {}", item.title), "Read More"),
    };
    CardView {
        id: item.id.clone(),
        title: item.title.clone(),
        summary: item.summary.clone(),
        category: item.category.clone(),
        category_label: category_label(&item.category),
        cover,
        alt: item.title.clone(),
        meta: card_meta(kind, item),
        action_label,
        action_text,
        reveal_delay_ms: config.reveal_step_ms.saturating_mul(index as u32),
    }
}

/// One card per item in input order, or the no-results placeholder
pub fn grid_view(kind: GalleryKind, config: &GalleryConfig, items: &[Item]) -> GridView {
    if items.is_empty() {
        return GridView::NoResults {
            message: format!("No {} found matching your criteria.", kind.noun()),
        };
    }
    GridView::Cards(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| card_view(kind, config, item, i))
            .collect(),
    )
}

// ========================
// Modal
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub images: Vec<ImageView>,
}

impl GalleryView {
    /// Thumbnails and prev/next controls only make sense for several images
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Paragraphs(Vec<String>),
    Html(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalFooter {
    /// Call to action that leaves the modal
    Contact { label: &'static str, href: &'static str },
    /// Share links and related-articles line
    Share { related: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub id: ItemId,
    pub title: String,
    pub meta: Vec<MetaEntry>,
    pub gallery: Option<GalleryView>,
    pub body: BodyView,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub footer: ModalFooter,
}

/// Id linking the dialog's `aria-labelledby` to its heading
pub fn modal_title_id(kind: GalleryKind) -> String {
    format!("{}-modal-title", kind.slug())
}

pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn gallery_view(config: &GalleryConfig, item: &Item) -> Option<GalleryView> {
    if item.images.is_empty() {
        return None;
    }
    let images = item
        .images
        .iter()
        .enumerate()
        .map(|(i, name)| ImageView {
            src: image_url(&config.image_base, name),
            alt: if i == 0 {
                item.title.clone()
            } else {
                format!("{} - Image {}", item.title, i + 1)
            },
        })
        .collect();
    Some(GalleryView { images })
}

pub fn modal_view(kind: GalleryKind, config: &GalleryConfig, item: &Item) -> ModalView {
    let (body, footer) = match kind {
        GalleryKind::Projects => (
            BodyView::Paragraphs(split_paragraphs(&item.body)),
            ModalFooter::Contact {
                label: "Discuss Your Project",
                href: "#contact",
            },
        ),
        GalleryKind::Blog => (
            BodyView::Html(render_article(&item.body, &config.image_base)),
            ModalFooter::Share {
                related: format!("Explore more articles about {}", category_label(&item.category)),
            },
        ),
    };
    ModalView {
        id: item.id.clone(),
        title: item.title.clone(),
        meta: modal_meta(kind, item),
        gallery: gallery_view(config, item),
        body,
        features: item.features.clone(),
        tags: item.tags.clone(),
        footer,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub label: String,
    pub href: String,
    pub icon: &'static str,
}

/// Share targets for an article at `page_url`
pub fn share_links(page_url: &str, title: &str) -> Vec<ShareLink> {
    let url = utf8_percent_encode(page_url, NON_ALPHANUMERIC).to_string();
    let text = utf8_percent_encode(title, NON_ALPHANUMERIC).to_string();
    [
        ("Facebook", "fab fa-facebook-f", format!("https://www.facebook.com/sharer/sharer.php?u={}", url)),
        ("Twitter", "fab fa-twitter", format!("https://twitter.com/intent/tweet?url={}&text={}", url, text)),
        ("LinkedIn", "fab fa-linkedin-in", format!("https://www.linkedin.com/sharing/share-offsite/?url={}", url)),
        ("Pinterest", "fab fa-pinterest-p", format!("https://pinterest.com/pin/create/button/?url={}&description={}", url, text)),
    ]
    .into_iter()
    .map(|(network, icon, href)| ShareLink {
        label: format!("Share on {}", network),
        href,
        icon,
    })
    .collect()
}

// ========================
// Announcements
// ========================

pub fn loaded_message(kind: GalleryKind, count: usize) -> String {
    format!("Loaded {} {}", count, kind.noun())
}

pub fn results_message(kind: GalleryKind, shown: usize, total: usize) -> String {
    if shown == 0 {
        format!("No {} match the current filters", kind.noun())
    } else {
        format!("Showing {} of {} {}", shown, total, kind.noun())
    }
}
