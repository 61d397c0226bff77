// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Browse page filtering and favorites.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::db::ItemCatalog;
use crate::models::Item;

/// Filter value that matches everything.
pub const ALL: &str = "All";

pub const CATEGORIES: &[&str] = &[ALL, "Tops", "Bottoms", "Dresses", "Outerwear", "Accessories"];
pub const SIZES: &[&str] = &[ALL, "XS", "S", "M", "L", "XL", "One Size"];
pub const CONDITIONS: &[&str] = &[ALL, "Like New", "Excellent", "Good", "Fair"];
pub const TYPES: &[&str] = &[ALL, "Casual", "Formal", "Sports", "Party"];

/// Current browse filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against title, description and tags
    pub search: String,
    pub category: String,
    pub size: String,
    pub condition: String,
    #[serde(rename = "type")]
    pub item_type: String,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            size: ALL.to_string(),
            condition: ALL.to_string(),
            item_type: ALL.to_string(),
        }
    }
}

impl ItemFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Whether `item` passes every filter.
    pub fn matches(&self, item: &Item) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = item.title.to_lowercase().contains(&term)
            || item.description.to_lowercase().contains(&term)
            || item.tags.iter().any(|tag| tag.to_lowercase().contains(&term));

        matches_search
            && selected(&self.category, &item.category)
            && selected(&self.size, &item.size)
            && selected(&self.condition, &item.condition)
            && selected(&self.item_type, &item.item_type)
    }

    /// Items passing the filter, in their original order. No pagination.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

fn selected(filter: &str, value: &str) -> bool {
    filter == ALL || filter == value
}

/// Browse view state: the filter plus the items the user has hearted.
pub struct BrowseView {
    catalog: Arc<dyn ItemCatalog>,
    pub filter: ItemFilter,
    liked: BTreeSet<String>,
}

impl BrowseView {
    pub fn new(catalog: Arc<dyn ItemCatalog>) -> Self {
        Self {
            catalog,
            filter: ItemFilter::default(),
            liked: BTreeSet::new(),
        }
    }

    /// Filtered listings, recomputed from the catalog on every call.
    pub fn results(&self) -> Vec<Item> {
        self.catalog
            .list()
            .into_iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Toggle the heart on an item. Returns whether it is now liked.
    pub fn toggle_like(&mut self, item_id: &str) -> bool {
        if self.liked.remove(item_id) {
            false
        } else {
            self.liked.insert(item_id.to_string());
            true
        }
    }

    /// Whether to draw the heart filled: liked here, or liked by anyone.
    pub fn shows_liked(&self, item: &Item) -> bool {
        self.liked.contains(&item.id) || !item.liked_by.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{fixtures, InMemoryItemCatalog};

    fn titles(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let items = fixtures::items();
        assert_eq!(ItemFilter::default().apply(&items).len(), items.len());
    }

    #[test]
    fn test_search_denim() {
        let items = fixtures::items();
        let results = ItemFilter::default().search("denim").apply(&items);
        assert_eq!(titles(&results), vec!["Vintage Denim Jacket"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_checks_tags() {
        let items = fixtures::items();
        let results = ItemFilter::default().search("LUXURY").apply(&items);
        assert_eq!(titles(&results), vec!["Designer Handbag"]);

        // "midi" only appears in a tag and the description
        let results = ItemFilter::default().search("Midi").apply(&items);
        assert_eq!(titles(&results), vec!["Summer Floral Dress"]);
    }

    #[test]
    fn test_category_dresses() {
        let items = fixtures::items();
        let results = ItemFilter::default().category("Dresses").apply(&items);
        assert_eq!(titles(&results), vec!["Summer Floral Dress"]);
    }

    #[test]
    fn test_filters_combine() {
        let items = fixtures::items();
        let results = ItemFilter::default()
            .category("Outerwear")
            .size("M")
            .item_type("Formal")
            .apply(&items);
        assert_eq!(titles(&results), vec!["Professional Blazer"]);

        let none = ItemFilter::default()
            .category("Outerwear")
            .condition("Fair")
            .apply(&items);
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_values_are_exact() {
        let items = fixtures::items();
        assert!(ItemFilter::default().category("dresses").apply(&items).is_empty());
    }

    #[test]
    fn test_browse_view_toggle_like() {
        let mut view = BrowseView::new(Arc::new(InMemoryItemCatalog::seeded()));
        assert!(view.toggle_like("3"));
        assert!(!view.toggle_like("3"));

        let sweater = view
            .results()
            .into_iter()
            .find(|i| i.id == "3")
            .unwrap();
        assert!(!view.shows_liked(&sweater));
        view.toggle_like("3");
        assert!(view.shows_liked(&sweater));
    }

    #[test]
    fn test_browse_view_results_follow_filter() {
        let mut view = BrowseView::new(Arc::new(InMemoryItemCatalog::seeded()));
        view.filter = ItemFilter::default().search("knit");
        let results = view.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "3");
    }
}
