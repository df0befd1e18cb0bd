//! Gallery Data Loader
//!
//! One fetch per gallery; the body is parsed and validated into `Item`s.

use std::collections::HashSet;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::GalleryError;
use crate::models::{GalleryKind, Item, PostsDocument, ProjectsDocument};

/// Fetch and parse the document at `url`
pub async fn load(kind: GalleryKind, url: &str) -> Result<Vec<Item>, GalleryError> {
    log::info!("loading {} from {}", kind.noun(), url);
    let body = fetch_text(url).await?;
    let items = parse_items(kind, &body)?;
    log::info!("loaded {} {}", items.len(), kind.noun());
    Ok(items)
}

async fn fetch_text(url: &str) -> Result<String, GalleryError> {
    let window = web_sys::window().ok_or_else(|| GalleryError::transport(url, "no window"))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| GalleryError::transport(url, js_message(&e)))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| GalleryError::transport(url, "fetch did not yield a Response"))?;

    if !response.ok() {
        return Err(GalleryError::http(url, response.status(), &response.status_text()));
    }

    let text_promise = response
        .text()
        .map_err(|e| GalleryError::transport(url, js_message(&e)))?;
    JsFuture::from(text_promise)
        .await
        .map_err(|e| GalleryError::transport(url, js_message(&e)))?
        .as_string()
        .ok_or_else(|| GalleryError::Parse("response body is not text".into()))
}

fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Parse a gallery document and check its invariants
pub fn parse_items(kind: GalleryKind, body: &str) -> Result<Vec<Item>, GalleryError> {
    let items: Vec<Item> = match kind {
        GalleryKind::Projects => serde_json::from_str::<ProjectsDocument>(body)?
            .projects
            .into_iter()
            .map(Item::from)
            .collect(),
        GalleryKind::Blog => serde_json::from_str::<PostsDocument>(body)?
            .posts
            .into_iter()
            .map(Item::from)
            .collect(),
    };
    validate(items)
}

fn validate(mut items: Vec<Item>) -> Result<Vec<Item>, GalleryError> {
    let mut seen = HashSet::new();
    for item in &mut items {
        if !seen.insert(item.id.clone()) {
            return Err(GalleryError::Parse(format!("duplicate id {}", item.id)));
        }
        if item.category.trim().is_empty() {
            return Err(GalleryError::Parse(format!("item {} has an empty category", item.id)));
        }
        let before = item.images.len();
        item.images.retain(|src| !src.trim().is_empty());
        if item.images.len() != before {
            log::warn!("item {}: dropped {} blank image reference(s)", item.id, before - item.images.len());
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    const PROJECTS: &str = r#"{
        "projects": [
            {"id": 1, "title": "Hillside House", "category": "residential",
             "description": "A home on a slope", "images": ["hill-1.jpg", "hill-2.jpg"],
             "location": "Asheville, NC", "completionDate": "2023-05-15",
             "fullDescription": "First.\n\nSecond.", "features": ["Solar roof"]},
            {"id": 2, "title": "Market Hall", "category": "commercial",
             "description": "Food hall", "images": [], "location": "Denver, CO",
             "completionDate": "2022-11-01", "fullDescription": "Hall."},
            {"id": 3, "title": "Lake Cabin", "category": "residential",
             "description": "Cabin", "images": ["cabin.jpg"],
             "fullDescription": "Cabin."}
        ]
    }"#;

    #[test]
    fn test_parse_projects_preserves_order() {
        let items = parse_items(GalleryKind::Projects, PROJECTS).unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![ItemId::Num(1), ItemId::Num(2), ItemId::Num(3)]);
        assert_eq!(items[0].body, "First.\n\nSecond.");
        assert_eq!(items[0].meta.location.as_deref(), Some("Asheville, NC"));
        assert!(items[1].images.is_empty());
    }

    #[test]
    fn test_parse_posts() {
        let body = r#"{"posts": [{"id": "p1", "title": "Kitchen Trends", "category": "design-tips",
            "excerpt": "Ideas", "author": "Ana Ruiz", "publishDate": "2024-03-02",
            "featuredImage": "kitchen.jpg", "content": "<p>new kitchen trends</p>",
            "tags": ["kitchen", "trends"]}]}"#;
        let items = parse_items(GalleryKind::Blog, body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::Text("p1".into()));
        assert_eq!(items[0].images, vec!["kitchen.jpg".to_string()]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_items(GalleryKind::Projects, "<html>500</html>").unwrap_err();
        assert!(matches!(err, GalleryError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        // A posts document handed to the projects gallery
        let err = parse_items(GalleryKind::Projects, r#"{"posts": []}"#).unwrap_err();
        assert!(matches!(err, GalleryError::Parse(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let body = r#"{"projects": [
            {"id": 1, "title": "A", "category": "residential"},
            {"id": 1, "title": "B", "category": "commercial"}
        ]}"#;
        let err = parse_items(GalleryKind::Projects, body).unwrap_err();
        assert_eq!(err, GalleryError::Parse("duplicate id 1".into()));
    }

    #[test]
    fn test_empty_category_rejected() {
        let body = r#"{"projects": [{"id": 1, "title": "A", "category": " "}]}"#;
        assert!(matches!(
            parse_items(GalleryKind::Projects, body),
            Err(GalleryError::Parse(_))
        ));
    }

    #[test]
    fn test_blank_images_dropped() {
        let body = r#"{"projects": [{"id": 1, "title": "A", "category": "residential",
            "images": ["", "a.jpg", "  "]}]}"#;
        let items = parse_items(GalleryKind::Projects, body).unwrap();
        assert_eq!(items[0].images, vec!["a.jpg".to_string()]);
    }
}
