//! Gallery Configuration
//!
//! Per-gallery settings with kind-specific defaults, overridable from
//! the host element's `data-*` attributes.

use serde::Deserialize;

use crate::models::GalleryKind;

pub const FALLBACK_IMAGE: &str = "/images/projects/placeholder.jpg";

/// Attribute holding a JSON object of overrides
pub const CONFIG_ATTR: &str = "data-gallery-config";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub source_url: String,
    pub image_base: String,
    pub fallback_image: String,
    pub search_enabled: bool,
    pub debounce_ms: u32,
    pub lazy_root_margin: String,
    pub lazy_threshold: f64,
    pub skeleton_count: usize,
    pub skeleton_delay_ms: u32,
    pub reveal_step_ms: u32,
}

/// Partial config, every field optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub source_url: Option<String>,
    pub image_base: Option<String>,
    pub fallback_image: Option<String>,
    pub search_enabled: Option<bool>,
    pub debounce_ms: Option<u32>,
    pub lazy_root_margin: Option<String>,
    pub lazy_threshold: Option<f64>,
    pub skeleton_count: Option<usize>,
    pub skeleton_delay_ms: Option<u32>,
    pub reveal_step_ms: Option<u32>,
}

impl GalleryConfig {
    pub fn for_kind(kind: GalleryKind) -> Self {
        let (source_url, image_base, search_enabled) = match kind {
            GalleryKind::Projects => ("/data/projects.json", "/images/projects", false),
            GalleryKind::Blog => ("/data/blog-posts.json", "/images/blog", true),
        };
        Self {
            source_url: source_url.to_string(),
            image_base: image_base.to_string(),
            fallback_image: FALLBACK_IMAGE.to_string(),
            search_enabled,
            debounce_ms: 300,
            lazy_root_margin: "100px 0px".to_string(),
            lazy_threshold: 0.01,
            skeleton_count: 6,
            skeleton_delay_ms: 500,
            reveal_step_ms: 100,
        }
    }

    pub fn merge(&mut self, o: ConfigOverrides) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if let Some(v) = o.$field { self.$field = v; })*
            };
        }
        take!(
            source_url,
            image_base,
            fallback_image,
            search_enabled,
            debounce_ms,
            lazy_root_margin,
            lazy_threshold,
            skeleton_count,
            skeleton_delay_ms,
            reveal_step_ms
        );
    }

    /// Build the config for `kind` from attribute lookups on its host.
    ///
    /// `data-gallery-config` is applied first, then the dedicated
    /// `data-source` / `data-image-base` attributes.
    pub fn from_attributes(kind: GalleryKind, attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::for_kind(kind);
        if let Some(raw) = attr(CONFIG_ATTR) {
            match serde_json::from_str::<ConfigOverrides>(&raw) {
                Ok(overrides) => config.merge(overrides),
                Err(e) => log::warn!("ignoring invalid {} on {} gallery: {}", CONFIG_ATTR, kind.slug(), e),
            }
        }
        if let Some(url) = attr("data-source").filter(|s| !s.trim().is_empty()) {
            config.source_url = url;
        }
        if let Some(base) = attr("data-image-base").filter(|s| !s.trim().is_empty()) {
            config.image_base = base;
        }
        config
    }

    pub fn from_host(kind: GalleryKind, host: &web_sys::Element) -> Self {
        Self::from_attributes(kind, |name| host.get_attribute(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_kind_defaults() {
        let projects = GalleryConfig::for_kind(GalleryKind::Projects);
        assert_eq!(projects.source_url, "/data/projects.json");
        assert!(!projects.search_enabled);
        assert_eq!(projects.debounce_ms, 300);

        let blog = GalleryConfig::for_kind(GalleryKind::Blog);
        assert_eq!(blog.source_url, "/data/blog-posts.json");
        assert_eq!(blog.image_base, "/images/blog");
        assert!(blog.search_enabled);
        assert_eq!(blog.fallback_image, FALLBACK_IMAGE);
    }

    #[test]
    fn test_json_overrides_are_partial() {
        let map = attrs(&[(CONFIG_ATTR, r#"{"debounceMs": 150, "searchEnabled": true}"#)]);
        let config = GalleryConfig::from_attributes(GalleryKind::Projects, |k| map.get(k).cloned());
        assert_eq!(config.debounce_ms, 150);
        assert!(config.search_enabled);
        assert_eq!(config.skeleton_count, 6);
        assert_eq!(config.source_url, "/data/projects.json");
    }

    #[test]
    fn test_invalid_json_keeps_defaults() {
        let map = attrs(&[(CONFIG_ATTR, "{debounce: fast}")]);
        let config = GalleryConfig::from_attributes(GalleryKind::Blog, |k| map.get(k).cloned());
        assert_eq!(config, GalleryConfig::for_kind(GalleryKind::Blog));
    }

    #[test]
    fn test_dedicated_attributes_win() {
        let map = attrs(&[
            (CONFIG_ATTR, r#"{"sourceUrl": "/a.json"}"#),
            ("data-source", "/b.json"),
            ("data-image-base", "/media"),
        ]);
        let config = GalleryConfig::from_attributes(GalleryKind::Projects, |k| map.get(k).cloned());
        assert_eq!(config.source_url, "/b.json");
        assert_eq!(config.image_base, "/media");
    }

    #[test]
    fn test_blank_source_attribute_is_ignored() {
        let map = attrs(&[("data-source", "  ")]);
        let config = GalleryConfig::from_attributes(GalleryKind::Projects, |k| map.get(k).cloned());
        assert_eq!(config.source_url, "/data/projects.json");
    }
}
