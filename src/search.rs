//! Page-local free-text refinement
//!
//! Runs after the store call, on the items of one page only. It never
//! touches the continuation key, so a refined page may hold fewer items than
//! the limit while a next token is still present.

use crate::model::ActionRecord;

/// Case-insensitive substring match over action text, context and tags
pub struct SearchFilter;

impl SearchFilter {
    /// Trimmed, lowercased search term
    pub fn normalize(term: &str) -> String {
        term.trim().to_lowercase()
    }

    /// Keeps the items matching `term`, preserving order.
    ///
    /// An empty normalized term keeps every item.
    pub fn apply(items: Vec<ActionRecord>, term: &str) -> Vec<ActionRecord> {
        let needle = Self::normalize(term);
        if needle.is_empty() {
            return items;
        }
        items
            .into_iter()
            .filter(|item| Self::matches(item, &needle))
            .collect()
    }

    /// `needle` must already be normalized
    pub fn matches(item: &ActionRecord, needle: &str) -> bool {
        if item.action.to_lowercase().contains(needle) {
            return true;
        }
        if let Some(context) = &item.context {
            if context.to_lowercase().contains(needle) {
                return true;
            }
        }
        item.tags
            .as_ref()
            .map(|tags| tags.iter().any(|t| t.to_lowercase().contains(needle)))
            .unwrap_or(false)
    }
}
