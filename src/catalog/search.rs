use strsim::jaro_winkler;

use crate::models::{Category, FoodItem};

/// Minimum Jaro-Winkler similarity for a "did you mean" candidate.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Case-insensitive substring search over food names and categories.
///
/// A blank query returns every food. Results keep catalog order.
pub fn search<'a>(foods: &'a [FoodItem], query: &str) -> Vec<&'a FoodItem> {
    let query = query.trim();
    if query.is_empty() {
        return foods.iter().collect();
    }

    let needle = query.to_lowercase();
    let results: Vec<&FoodItem> = foods
        .iter()
        .filter(|food| {
            food.name.to_lowercase().contains(&needle)
                || food.category.as_str().to_lowercase().contains(&needle)
        })
        .collect();

    tracing::debug!(query, matches = results.len(), "food search");
    results
}

/// Foods of one category, in catalog order.
pub fn foods_by_category(foods: &[FoodItem], category: Category) -> Vec<&FoodItem> {
    foods.iter().filter(|f| f.category == category).collect()
}

/// Names closest to `query`, best first, for "did you mean" prompts.
pub fn closest_names<'a>(foods: &'a [FoodItem], query: &str, limit: usize) -> Vec<&'a FoodItem> {
    let needle = query.trim().to_lowercase();

    let mut candidates: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().take(limit).map(|(f, _)| f).collect()
}
