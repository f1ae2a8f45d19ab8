use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Recipe;

/// The seasonality collaborator's interface
///
/// Something outside this crate knows which ingredients are in season in the
/// current month and condenses that into a 0-100 score per recipe (0: nothing
/// in season, 100: everything in season). The engine only consumes the score:
/// the preference scorer turns it into a boost for users who prefer seasonal
/// cooking, and the seasonal-recommendations query ranks by it directly.
///
/// The lookup is a pure function of the recipe, so the trait is synchronous.
#[cfg_attr(test, mockall::automock)]
pub trait SeasonalityProvider: Send + Sync {
    /// Seasonal score for a recipe, in 0-100
    fn seasonal_score(&self, recipe: &Recipe) -> u8;
}

/// Provider for deployments without seasonal data: every recipe scores 0
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSeasonality;

impl SeasonalityProvider for NoSeasonality {
    fn seasonal_score(&self, _recipe: &Recipe) -> u8 {
        0
    }
}

/// Provider backed by a fixed per-recipe score table
///
/// Useful for tests and for callers that precompute scores in a batch job.
/// Recipes absent from the table score 0.
#[derive(Debug, Clone, Default)]
pub struct StaticSeasonality {
    scores: HashMap<Uuid, u8>,
}

impl StaticSeasonality {
    /// Builds a provider from a score table, clamping each entry to 100
    pub fn new(scores: HashMap<Uuid, u8>) -> Self {
        Self {
            scores: scores
                .into_iter()
                .map(|(recipe_id, score)| (recipe_id, score.min(100)))
                .collect(),
        }
    }

    /// Sets the score for one recipe, clamped to 100
    pub fn set_score(&mut self, recipe_id: Uuid, score: u8) {
        self.scores.insert(recipe_id, score.min(100));
    }
}

impl SeasonalityProvider for StaticSeasonality {
    fn seasonal_score(&self, recipe: &Recipe) -> u8 {
        self.scores.get(&recipe.id).copied().unwrap_or(0)
    }
}
