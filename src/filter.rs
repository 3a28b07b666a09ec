//! Category Filter
//!
//! Derives the visible subset of a registry from one selected label.

use crate::models::GalleryItem;

/// Sentinel label that shows every item
pub const ALL: &str = "All";

/// `"All"` followed by each distinct category in first-occurrence order
pub fn categories(items: &[GalleryItem]) -> Vec<String> {
    let mut labels = vec![ALL.to_string()];
    for category in items.iter().filter_map(|item| item.category.as_deref()) {
        if !labels.iter().any(|label| label == category) {
            labels.push(category.to_string());
        }
    }
    labels
}

/// Items matching `active` (case-sensitive), in registry order.
///
/// Unknown labels give an empty list; uncategorised items only show under
/// `"All"`.
pub fn visible<'a>(items: &'a [GalleryItem], active: &str) -> Vec<&'a GalleryItem> {
    if active == ALL {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category.as_deref() == Some(active))
        .collect()
}

/// Currently selected category label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveCategory(String);

impl ActiveCategory {
    pub fn set(&mut self, label: impl Into<String>) {
        self.0 = label.into();
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn is(&self, label: &str) -> bool {
        self.0 == label
    }
}

impl Default for ActiveCategory {
    fn default() -> Self {
        Self(ALL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Media;

    fn make_item(id: u32, category: Option<&str>) -> GalleryItem {
        GalleryItem {
            id,
            title: format!("Item {}", id),
            description: String::new(),
            media: Media::Image { src: format!("/images/project{}.png", id) },
            category: category.map(str::to_string),
            tags: Vec::new(),
            duration: None,
            live_url: None,
        }
    }

    fn ids(items: &[&GalleryItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    fn sample() -> Vec<GalleryItem> {
        vec![
            make_item(1, Some("Ecommerce")),
            make_item(2, Some("Education")),
            make_item(3, Some("Hospitality")),
            make_item(4, Some("Ecommerce")),
        ]
    }

    #[test]
    fn test_all_yields_full_registry() {
        let items = sample();
        assert_eq!(ids(&visible(&items, ALL)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let items = sample();
        assert_eq!(ids(&visible(&items, "Ecommerce")), vec![1, 4]);
        assert_eq!(ids(&visible(&items, "Hospitality")), vec![3]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let items = sample();
        assert!(visible(&items, "ecommerce").is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let items = sample();
        assert!(visible(&items, "Agency").is_empty());
        assert!(visible(&[], "Agency").is_empty());
    }

    #[test]
    fn test_every_listed_category_matches_exactly_its_items() {
        let items = sample();
        for label in categories(&items).iter().skip(1) {
            let shown = visible(&items, label);
            assert!(!shown.is_empty());
            assert!(shown.iter().all(|item| item.category.as_deref() == Some(label.as_str())));
            let expected = items.iter().filter(|i| i.category.as_deref() == Some(label.as_str())).count();
            assert_eq!(shown.len(), expected);
        }
    }

    #[test]
    fn test_categories_dedupe_in_first_occurrence_order() {
        let items = sample();
        assert_eq!(categories(&items), vec!["All", "Ecommerce", "Education", "Hospitality"]);
    }

    #[test]
    fn test_uncategorised_items_only_under_all() {
        let items = vec![make_item(1, None), make_item(2, Some("Business"))];
        assert_eq!(categories(&items), vec!["All", "Business"]);
        assert_eq!(ids(&visible(&items, ALL)), vec![1, 2]);
        assert_eq!(ids(&visible(&items, "Business")), vec![2]);
    }

    #[test]
    fn test_active_category_defaults_to_all() {
        let mut active = ActiveCategory::default();
        assert!(active.is(ALL));
        active.set("Portfolio");
        assert_eq!(active.label(), "Portfolio");
    }
}
