use std::collections::HashSet;

use uuid::Uuid;

use crate::config::RecommenderConfig;
use crate::models::{Recipe, UserPreferences};
use crate::seasonality::SeasonalityProvider;
use crate::services::ScoreMap;

/// Preference-match scores: recipes against the user's declared preferences
///
/// Each non-excluded recipe accumulates boosts for category, cuisine,
/// favorite-ingredient, difficulty, and prep-time matches, a penalty per
/// disliked ingredient, and an optional seasonality bonus, then clamps to
/// [0, 1]. Candidates whose clamped score is not positive are dropped from
/// the map entirely, which keeps them out of the hybrid union when no other
/// scorer speaks for them.
pub fn preference_scores(
    preferences: &UserPreferences,
    recipes: &[Recipe],
    excluded: &HashSet<Uuid>,
    seasonality: &dyn SeasonalityProvider,
    config: &RecommenderConfig,
) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for recipe in recipes {
        if excluded.contains(&recipe.id) {
            continue;
        }

        let score = match_score(preferences, recipe, seasonality, config);
        if score > 0.0 {
            scores.insert(recipe.id, score);
        }
    }

    scores
}

/// Scores a single recipe against the preferences, clamped to [0, 1]
fn match_score(
    preferences: &UserPreferences,
    recipe: &Recipe,
    seasonality: &dyn SeasonalityProvider,
    config: &RecommenderConfig,
) -> f64 {
    let mut score = 0.0;

    if let Some(category) = &recipe.category {
        if preferences.preferred_categories.contains(category) {
            score += config.category_match_boost;
        }
    }

    if let Some(cuisine) = &recipe.cuisine {
        if preferences.preferred_cuisines.contains(cuisine) {
            score += config.cuisine_match_boost;
        }
    }

    let kinds = recipe.ingredient_kinds();

    let favorite_count = kinds
        .iter()
        .filter(|kind| preferences.favorite_ingredients.contains(*kind))
        .count();
    score += favorite_count as f64 * config.favorite_ingredient_boost;

    let disliked_count = kinds
        .iter()
        .filter(|kind| preferences.disliked_ingredients.contains(*kind))
        .count();
    score -= disliked_count as f64 * config.disliked_ingredient_penalty;

    if let (Some(preferred), Some(difficulty)) =
        (&preferences.difficulty_preference, &recipe.difficulty)
    {
        if preferred == difficulty {
            score += config.difficulty_match_boost;
        }
    }

    if let (Some(ceiling), Some(prep_time)) =
        (preferences.max_prep_time_minutes, recipe.prep_time_minutes)
    {
        if prep_time <= ceiling {
            score += config.prep_time_boost;
        }
    }

    if preferences.prefer_seasonal {
        let seasonal = f64::from(seasonality.seasonal_score(recipe));
        score += seasonal / 100.0 * config.seasonal_boost;
    }

    score.clamp(0.0, 1.0)
}
