use std::collections::HashSet;

use crate::model::{AggregationResult, RecipeSummary};

/// Caps applied while merging query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum length of the merged result
    pub max_results: usize,
    /// How many leading category matches are considered
    pub category_take: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_results: 12,
            category_take: 8,
        }
    }
}

/// Merge the three query results in priority order.
///
/// The first occurrence of an identifier wins and keeps its position; later
/// duplicates are dropped. Only the first `category_take` category matches are
/// looked at, and the concatenation is truncated to `max_results`.
pub fn merge(
    by_ingredient: Vec<RecipeSummary>,
    by_name: Vec<RecipeSummary>,
    by_category: Vec<RecipeSummary>,
    limits: SearchLimits,
) -> AggregationResult {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    let candidates = by_ingredient
        .into_iter()
        .chain(by_name)
        .chain(by_category.into_iter().take(limits.category_take));

    for recipe in candidates {
        if seen.insert(recipe.id.clone()) {
            merged.push(recipe);
        }
    }

    merged.truncate(limits.max_results);
    AggregationResult::new(merged)
}
