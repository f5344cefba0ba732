use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::model::item::Item;

/// Live substring filter over item text
#[derive(Debug, Clone)]
pub struct ItemFilter {
    query: String,
    re: Option<Regex>,
}

impl ItemFilter {
    /// Build a filter for a literal `query`. Case folding uses Unicode rules,
    /// so match ranges always index into the original text.
    pub fn new(query: &str, case_sensitive: bool) -> Self {
        let re = if query.is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(query))
                .case_insensitive(!case_sensitive)
                .build()
                .ok()
        };
        ItemFilter {
            query: query.to_string(),
            re,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// An empty query matches everything
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }
        match &self.re {
            Some(re) => re.is_match(text),
            None => text.contains(&self.query),
        }
    }

    /// Byte ranges of each match in `text`, for highlighting
    pub fn match_ranges(&self, text: &str) -> Vec<Range<usize>> {
        match &self.re {
            Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }

    /// Indices of the items that pass the filter, in list order
    pub fn apply(&self, items: &[Item]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(&item.text))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Indices of items whose text contains `query`.
pub fn filter_items(items: &[Item], query: &str, case_sensitive: bool) -> Vec<usize> {
    ItemFilter::new(query, case_sensitive).apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::unchecked("Buy milk"),
            Item::unchecked("Call plumber"),
            Item::checked("buy stamps"),
            Item::checked("File taxes (2024)"),
        ]
    }

    #[test]
    fn empty_query_matches_all() {
        assert_eq!(filter_items(&items(), "", false), vec![0, 1, 2, 3]);
        assert!(!ItemFilter::new("", false).is_active());
    }

    #[test]
    fn case_insensitive_by_default() {
        assert_eq!(filter_items(&items(), "buy", false), vec![0, 2]);
        assert_eq!(filter_items(&items(), "BUY", false), vec![0, 2]);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(filter_items(&items(), "buy", true), vec![2]);
        assert_eq!(filter_items(&items(), "Buy", true), vec![0]);
    }

    #[test]
    fn query_is_literal() {
        assert_eq!(filter_items(&items(), "(2024)", false), vec![3]);
        assert!(filter_items(&items(), ".*", false).is_empty());
    }

    #[test]
    fn no_match() {
        assert!(filter_items(&items(), "zebra", false).is_empty());
    }

    #[test]
    fn match_ranges_index_original_text() {
        let filter = ItemFilter::new("ab", false);
        assert_eq!(filter.match_ranges("xABcab"), vec![1..3, 4..6]);
        assert!(ItemFilter::new("", false).match_ranges("abc").is_empty());
    }

    #[test]
    fn non_ascii() {
        let filter = ItemFilter::new("café", false);
        assert!(filter.matches("Le CAFÉ du coin"));
        let range = filter.match_ranges("Le CAFÉ du coin")[0].clone();
        assert_eq!(&"Le CAFÉ du coin"[range], "CAFÉ");
    }
}
