//! Category Filter and Text Search
//!
//! Pure functions over the loaded item list. Callers always pass the
//! full list; filtering a filtered list would compound the criteria.

use crate::models::Item;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Trimmed, lower-cased form of a raw search input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Items in `all` matching `category` AND `query`, in input order
pub fn apply(all: &[Item], category: &str, query: &str) -> Vec<Item> {
    let query = normalize_query(query);
    all.iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .filter(|item| query.is_empty() || matches_query(item, &query))
        .cloned()
        .collect()
}

/// Case-insensitive substring match; `query` must already be normalized
pub fn matches_query(item: &Item, query: &str) -> bool {
    let meta = &item.meta;
    contains(&item.title, query)
        || contains(&item.summary, query)
        || contains(&item.body, query)
        || [&meta.author, &meta.location, &meta.date]
            .into_iter()
            .flatten()
            .any(|text| contains(text, query))
        || item.tags.iter().any(|tag| contains(tag, query))
}

fn contains(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(query)
}

/// `"all"` followed by each distinct category in order of first appearance
pub fn categories(all: &[Item]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in all {
        if !out.iter().any(|c| c == &item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::item;
    use crate::models::ItemId;

    fn ids(items: &[Item]) -> Vec<ItemId> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn projects() -> Vec<Item> {
        vec![
            item(1, "Hillside House", "residential"),
            item(2, "Market Hall", "commercial"),
            item(3, "Lake Cabin", "residential"),
        ]
    }

    #[test]
    fn test_all_and_empty_query_is_identity() {
        let all = projects();
        assert_eq!(apply(&all, ALL_CATEGORIES, ""), all);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let out = apply(&projects(), "residential", "");
        assert_eq!(ids(&out), vec![ItemId::Num(1), ItemId::Num(3)]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert!(apply(&projects(), "Residential", "").is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(apply(&projects(), "industrial", "").is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let out = apply(&projects(), ALL_CATEGORIES, "  MARKET h ");
        assert_eq!(ids(&out), vec![ItemId::Num(2)]);
    }

    #[test]
    fn test_category_and_query_intersect() {
        let all = projects();
        // "a" appears in every summary, the category narrows it
        let out = apply(&all, "residential", "a");
        assert_eq!(ids(&out), vec![ItemId::Num(1), ItemId::Num(3)]);
        // "market" only matches a commercial item
        assert!(apply(&all, "residential", "market").is_empty());
    }

    #[test]
    fn test_results_are_subset_of_unfiltered() {
        let all = projects();
        let everything = apply(&all, ALL_CATEGORIES, "");
        for category in categories(&all) {
            for item in &all {
                for q in [&item.title[..3], &item.title[2..6]] {
                    let out = apply(&all, &category, q);
                    for hit in &out {
                        assert!(everything.contains(hit));
                        assert!(category == ALL_CATEGORIES || hit.category == category);
                        assert!(matches_query(hit, &normalize_query(q)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_search_covers_body_author_and_tags() {
        let mut with_body = item(10, "Spring Update", "design-tips");
        with_body.body = "Here are the new kitchen trends for 2024.".into();

        let mut with_tag = item(11, "Small Spaces", "living-spaces");
        with_tag.tags = vec!["Kitchen".into()];

        let mut with_author = item(12, "Studio Notes", "architecture");
        with_author.meta.author = Some("Kitchener Smith".into());

        let unrelated = item(13, "Facade Materials", "architecture");

        let all = vec![with_body, with_tag, with_author, unrelated];
        let out = apply(&all, ALL_CATEGORIES, "kitchen");
        assert_eq!(ids(&out), vec![ItemId::Num(10), ItemId::Num(11), ItemId::Num(12)]);
    }

    #[test]
    fn test_refiltering_from_source_does_not_compound() {
        let all = projects();
        let narrowed = apply(&all, "commercial", "");
        assert_eq!(narrowed.len(), 1);
        // Widening again must start from the full list
        assert_eq!(apply(&all, ALL_CATEGORIES, ""), all);
        // Chaining onto the narrowed list is what callers must avoid
        assert_eq!(apply(&narrowed, ALL_CATEGORIES, "").len(), 1);
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(
            categories(&projects()),
            vec!["all".to_string(), "residential".to_string(), "commercial".to_string()]
        );
        assert_eq!(categories(&[]), vec!["all".to_string()]);
    }
}
