//! Gallery Models
//!
//! Records as they appear in the static JSON documents, and the
//! normalized `Item` both galleries work with.

use serde::Deserialize;
use std::fmt;

/// Which gallery a document or view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryKind {
    Projects,
    Blog,
}

impl GalleryKind {
    pub const ALL: [GalleryKind; 2] = [GalleryKind::Projects, GalleryKind::Blog];

    /// Value of the host's `data-gallery` attribute
    pub fn slug(self) -> &'static str {
        match self {
            GalleryKind::Projects => "projects",
            GalleryKind::Blog => "blog",
        }
    }

    /// Plural noun used in user-facing messages
    pub fn noun(self) -> &'static str {
        match self {
            GalleryKind::Projects => "projects",
            GalleryKind::Blog => "blog posts",
        }
    }
}

/// Stable identifier, numeric or textual in the source data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Project entry of `projects.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// `{ "projects": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsDocument {
    pub projects: Vec<ProjectRecord>,
}

/// Post entry of `blog-posts.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `{ "posts": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct PostsDocument {
    pub posts: Vec<PostRecord>,
}

/// Display-only fields, never used for category filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMeta {
    pub author: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// A project or post, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Card text (description / excerpt)
    pub summary: String,
    /// Modal text (full description / content)
    pub body: String,
    /// Image references, first is the cover
    pub images: Vec<String>,
    pub meta: ItemMeta,
    pub tags: Vec<String>,
    pub features: Vec<String>,
}

impl Item {
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl From<ProjectRecord> for Item {
    fn from(p: ProjectRecord) -> Self {
        Item {
            id: p.id,
            title: p.title,
            category: p.category,
            summary: p.description,
            body: p.full_description,
            images: p.images,
            meta: ItemMeta {
                author: None,
                date: p.completion_date,
                location: p.location,
            },
            tags: Vec::new(),
            features: p.features,
        }
    }
}

impl From<PostRecord> for Item {
    fn from(p: PostRecord) -> Self {
        Item {
            id: p.id,
            title: p.title,
            category: p.category,
            summary: p.excerpt,
            body: p.content,
            images: p.featured_image.into_iter().collect(),
            meta: ItemMeta {
                author: p.author,
                date: p.publish_date,
                location: None,
            },
            tags: p.tags,
            features: Vec::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn item(id: u64, title: &str, category: &str) -> Item {
        Item {
            id: ItemId::Num(id),
            title: title.to_string(),
            category: category.to_string(),
            summary: format!("Summary of {}", title),
            body: format!("Body of {}", title),
            images: vec![format!("{}.jpg", id)],
            meta: ItemMeta::default(),
            tags: Vec::new(),
            features: Vec::new(),
        }
    }
}
