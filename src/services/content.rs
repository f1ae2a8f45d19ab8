use std::collections::HashSet;

use uuid::Uuid;

use crate::config::RecommenderConfig;
use crate::models::{Interaction, Recipe};
use crate::services::similarity::recipe_similarity;
use crate::services::ScoreMap;

/// Content-based scores: candidates similar to the user's most-engaged recipes
///
/// The user's interactions, ordered by view count descending and truncated to
/// `max_anchor_recipes`, become the anchors. Every candidate outside the
/// exclusion set is scored by its **maximum** similarity across all anchors:
/// one strong match should dominate rather than being diluted by several weak
/// anchors. A user with no interactions yields an empty map.
pub fn content_scores(
    interactions: &[Interaction],
    recipes: &[Recipe],
    excluded: &HashSet<Uuid>,
    config: &RecommenderConfig,
) -> ScoreMap {
    let mut scores = ScoreMap::new();

    if interactions.is_empty() {
        return scores;
    }

    let mut ranked: Vec<&Interaction> = interactions.iter().collect();
    // Recipe id as secondary key keeps anchor selection deterministic when
    // view counts tie at the cutoff
    ranked.sort_by(|a, b| {
        b.view_count
            .cmp(&a.view_count)
            .then_with(|| a.recipe_id.cmp(&b.recipe_id))
    });
    let anchor_ids: Vec<Uuid> = ranked
        .iter()
        .take(config.max_anchor_recipes)
        .map(|interaction| interaction.recipe_id)
        .collect();

    for anchor_id in &anchor_ids {
        let Some(anchor) = recipes.iter().find(|recipe| recipe.id == *anchor_id) else {
            // Interaction references a recipe no longer in the corpus
            tracing::debug!(recipe_id = %anchor_id, "Anchor recipe missing from corpus");
            continue;
        };

        for candidate in recipes {
            if excluded.contains(&candidate.id) {
                continue;
            }

            let similarity = recipe_similarity(anchor, candidate, config);
            let entry = scores.entry(candidate.id).or_insert(0.0);
            if similarity > *entry {
                *entry = similarity;
            }
        }
    }

    scores
}
