use std::collections::HashSet;
use std::hash::Hash;

use crate::config::RecommenderConfig;
use crate::models::Recipe;

/// Jaccard similarity between two sets: |intersection| / |union|
///
/// Two empty sets score 0.0, not 1.0: with no recorded members there is no
/// evidence of similarity. Symmetric in its arguments.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    intersection as f64 / union as f64
}

/// Similarity between two recipes in [0, 1]
///
/// Weighted combination of ingredient-kind Jaccard overlap and exact
/// category/cuisine matches. A match term is 1.0 only when both recipes carry
/// a value and the values are equal; a missing value on either side
/// contributes 0 rather than being skipped, so recipes with sparse metadata
/// cap out below 1.0 by construction.
pub fn recipe_similarity(a: &Recipe, b: &Recipe, config: &RecommenderConfig) -> f64 {
    let ingredient_similarity = jaccard(&a.ingredient_kinds(), &b.ingredient_kinds());

    let category_match = match (&a.category, &b.category) {
        (Some(left), Some(right)) if left == right => 1.0,
        _ => 0.0,
    };

    let cuisine_match = match (&a.cuisine, &b.cuisine) {
        (Some(left), Some(right)) if left == right => 1.0,
        _ => 0.0,
    };

    ingredient_similarity * config.ingredient_weight
        + category_match * config.category_weight
        + cuisine_match * config.cuisine_weight
}
