use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::config::RecommenderConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Interaction, Recipe};
use crate::seasonality::SeasonalityProvider;
use crate::services::collaborative::collaborative_scores;
use crate::services::content::content_scores;
use crate::services::preference::preference_scores;
use crate::services::similarity::recipe_similarity;
use crate::services::ScoreMap;
use crate::storage::CatalogStore;

/// Hybrid recipe recommendation engine
///
/// Per request, reads a snapshot of the catalog through [`CatalogStore`],
/// runs the three scoring passes, and merges them with the configured
/// weights. Stateless between requests: concurrent invocations share nothing
/// but the store's read path.
pub struct Recommender {
    store: Arc<dyn CatalogStore>,
    seasonality: Arc<dyn SeasonalityProvider>,
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        seasonality: Arc<dyn SeasonalityProvider>,
        config: RecommenderConfig,
    ) -> Self {
        Self {
            store,
            seasonality,
            config,
        }
    }

    /// Personalized recommendations for a user
    ///
    /// Combines content-based, collaborative, and preference scores as
    /// `content_weight * content + collaborative_weight * collaborative +
    /// preference_weight * preference`, ranks descending, and returns the top
    /// `limit` recipes. With `include_previous` the user's already-interacted
    /// recipes stay eligible; otherwise they are excluded from every scorer.
    ///
    /// Returns `NotFound` for an unknown user. A user with no history or no
    /// preference matches degrades to a short or empty list, never an error.
    pub async fn recommend_for_user(
        &self,
        user_id: Uuid,
        limit: usize,
        include_previous: bool,
    ) -> AppResult<Vec<Recipe>> {
        let start = Instant::now();

        let user = self
            .store
            .user_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let interactions = self.store.interactions_for_user(user_id).await?;
        let excluded: HashSet<Uuid> = if include_previous {
            HashSet::new()
        } else {
            interactions.iter().map(|i| i.recipe_id).collect()
        };

        let recipes = self.store.all_recipes().await?;
        let interactions_by_user = self.fetch_all_interactions(user_id, &interactions).await?;

        let content = content_scores(&interactions, &recipes, &excluded, &self.config);
        let collaborative =
            collaborative_scores(user_id, &interactions_by_user, &excluded, &self.config);
        let preference = preference_scores(
            &user.preferences,
            &recipes,
            &excluded,
            self.seasonality.as_ref(),
            &self.config,
        );

        tracing::debug!(
            user_id = %user_id,
            content_candidates = content.len(),
            collaborative_candidates = collaborative.len(),
            preference_candidates = preference.len(),
            "Scoring passes complete"
        );

        let combined = combine_scores(&content, &collaborative, &preference, &self.config);
        let ranked_ids = rank(combined, limit);
        let recommendations = self.materialize(ranked_ids).await?;

        tracing::info!(
            user_id = %user_id,
            username = %user.username,
            returned = recommendations.len(),
            include_previous,
            processing_time_ms = start.elapsed().as_millis(),
            "Recommendations generated"
        );

        Ok(recommendations)
    }

    /// Recipes most similar to the given one, by ingredient/category/cuisine
    ///
    /// Scores the target against every other recipe in the corpus; the target
    /// itself is never part of the result. Returns `NotFound` for an unknown
    /// recipe.
    pub async fn similar_recipes(&self, recipe_id: Uuid, limit: usize) -> AppResult<Vec<Recipe>> {
        let target = self
            .store
            .recipe_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", recipe_id)))?;

        let recipes = self.store.all_recipes().await?;

        let scores: ScoreMap = recipes
            .iter()
            .filter(|recipe| recipe.id != recipe_id)
            .map(|recipe| {
                (
                    recipe.id,
                    recipe_similarity(&target, recipe, &self.config),
                )
            })
            .collect();

        let ranked_ids = rank(scores, limit);

        tracing::info!(
            recipe_id = %recipe_id,
            corpus = recipes.len(),
            returned = ranked_ids.len(),
            "Similar recipes computed"
        );

        Ok(reorder(recipes, &ranked_ids))
    }

    /// Recipes ranked by their externally supplied seasonal score
    pub async fn seasonal_recommendations(&self, limit: usize) -> AppResult<Vec<Recipe>> {
        let recipes = self.store.all_recipes().await?;

        let mut scored: Vec<(u8, Recipe)> = recipes
            .into_iter()
            .map(|recipe| (self.seasonality.seasonal_score(&recipe), recipe))
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));
        scored.truncate(limit);

        tracing::info!(
            returned = scored.len(),
            top_score = scored.first().map(|(score, _)| *score),
            "Seasonal recommendations computed"
        );

        Ok(scored.into_iter().map(|(_, recipe)| recipe).collect())
    }

    /// Interaction lists for every user, keyed by user id
    ///
    /// The target's already-fetched list is reused rather than re-read.
    async fn fetch_all_interactions(
        &self,
        target_id: Uuid,
        target_interactions: &[Interaction],
    ) -> AppResult<HashMap<Uuid, Vec<Interaction>>> {
        let users = self.store.all_users().await?;

        let mut interactions_by_user = HashMap::with_capacity(users.len());
        interactions_by_user.insert(target_id, target_interactions.to_vec());

        for user in users {
            if user.id == target_id {
                continue;
            }
            let interactions = self.store.interactions_for_user(user.id).await?;
            interactions_by_user.insert(user.id, interactions);
        }

        Ok(interactions_by_user)
    }

    /// Materializes full recipe records for ranked ids, preserving rank order
    ///
    /// The store gives no ordering guarantee, so records are re-sorted by
    /// their position in the ranked id list.
    async fn materialize(&self, ranked_ids: Vec<Uuid>) -> AppResult<Vec<Recipe>> {
        let recipes = self.store.recipes_by_ids(ranked_ids.clone()).await?;
        Ok(reorder(recipes, &ranked_ids))
    }
}

/// Weighted merge of the three score maps over the union of their candidates
///
/// A candidate missing from a map contributes 0 for that component.
fn combine_scores(
    content: &ScoreMap,
    collaborative: &ScoreMap,
    preference: &ScoreMap,
    config: &RecommenderConfig,
) -> ScoreMap {
    let candidates: HashSet<Uuid> = content
        .keys()
        .chain(collaborative.keys())
        .chain(preference.keys())
        .copied()
        .collect();

    candidates
        .into_iter()
        .map(|recipe_id| {
            let combined = content.get(&recipe_id).copied().unwrap_or(0.0) * config.content_weight
                + collaborative.get(&recipe_id).copied().unwrap_or(0.0)
                    * config.collaborative_weight
                + preference.get(&recipe_id).copied().unwrap_or(0.0) * config.preference_weight;
            (recipe_id, combined)
        })
        .collect()
}

/// Ranks candidates by score descending and truncates to `limit`
///
/// Exactly equal scores break ties by ascending recipe id, making the
/// ordering deterministic across runs and map iteration orders.
fn rank(scores: ScoreMap, limit: usize) -> Vec<Uuid> {
    let mut entries: Vec<(Uuid, f64)> = scores.into_iter().collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries.truncate(limit);
    entries.into_iter().map(|(recipe_id, _)| recipe_id).collect()
}

/// Orders recipes to match the ranked id list, dropping ids with no record
fn reorder(recipes: Vec<Recipe>, ranked_ids: &[Uuid]) -> Vec<Recipe> {
    let positions: HashMap<Uuid, usize> = ranked_ids
        .iter()
        .enumerate()
        .map(|(position, id)| (*id, position))
        .collect();

    let mut ordered: Vec<Recipe> = recipes
        .into_iter()
        .filter(|recipe| positions.contains_key(&recipe.id))
        .collect();
    ordered.sort_by_key(|recipe| positions[&recipe.id]);
    ordered.truncate(ranked_ids.len());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seasonality::NoSeasonality;
    use crate::storage::MockCatalogStore;

    fn uuid_from_byte(byte: u8) -> Uuid {
        Uuid::from_bytes([byte; 16])
    }

    #[test]
    fn test_combine_scores_exact_arithmetic() {
        let config = RecommenderConfig::default();
        let recipe_id = Uuid::new_v4();

        let content: ScoreMap = [(recipe_id, 1.0)].into_iter().collect();
        let collaborative: ScoreMap = [(recipe_id, 0.5)].into_iter().collect();
        let preference = ScoreMap::new();

        let combined = combine_scores(&content, &collaborative, &preference, &config);
        // 0.4 * 1.0 + 0.3 * 0.5 + 0.3 * 0.0
        assert!((combined[&recipe_id] - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_combine_scores_unions_candidates() {
        let config = RecommenderConfig::default();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let content: ScoreMap = [(a, 1.0)].into_iter().collect();
        let collaborative: ScoreMap = [(b, 1.0)].into_iter().collect();
        let preference: ScoreMap = [(c, 1.0)].into_iter().collect();

        let combined = combine_scores(&content, &collaborative, &preference, &config);
        assert_eq!(combined.len(), 3);
        assert!((combined[&a] - 0.4).abs() < 1e-12);
        assert!((combined[&b] - 0.3).abs() < 1e-12);
        assert!((combined[&c] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_rank_orders_descending_and_truncates() {
        let (a, b, c) = (uuid_from_byte(1), uuid_from_byte(2), uuid_from_byte(3));
        let scores: ScoreMap = [(a, 0.2), (b, 0.9), (c, 0.5)].into_iter().collect();

        assert_eq!(rank(scores, 2), vec![b, c]);
    }

    #[test]
    fn test_rank_breaks_ties_by_ascending_id() {
        let low = uuid_from_byte(1);
        let high = uuid_from_byte(9);
        let scores: ScoreMap = [(high, 0.5), (low, 0.5)].into_iter().collect();

        assert_eq!(rank(scores, 10), vec![low, high]);
    }

    #[test]
    fn test_reorder_restores_rank_order() {
        let first = Recipe::new("First".to_string(), "a".to_string());
        let second = Recipe::new("Second".to_string(), "b".to_string());
        let ranked = vec![first.id, second.id];

        // Store returned them backwards
        let ordered = reorder(vec![second.clone(), first.clone()], &ranked);
        assert_eq!(ordered[0].id, first.id);
        assert_eq!(ordered[1].id, second.id);
    }

    #[test]
    fn test_reorder_drops_unranked_records() {
        let wanted = Recipe::new("Wanted".to_string(), "a".to_string());
        let stray = Recipe::new("Stray".to_string(), "b".to_string());
        let ranked = vec![wanted.id];

        let ordered = reorder(vec![stray, wanted.clone()], &ranked);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].id, wanted.id);
    }

    #[tokio::test]
    async fn test_recommend_unknown_user_is_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_user_by_id().returning(|_| Ok(None));

        let recommender = Recommender::new(
            Arc::new(store),
            Arc::new(NoSeasonality),
            RecommenderConfig::default(),
        );

        let result = recommender.recommend_for_user(Uuid::new_v4(), 10, false).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_similar_recipes_unknown_recipe_is_not_found() {
        let mut store = MockCatalogStore::new();
        store.expect_recipe_by_id().returning(|_| Ok(None));

        let recommender = Recommender::new(
            Arc::new(store),
            Arc::new(NoSeasonality),
            RecommenderConfig::default(),
        );

        let result = recommender.similar_recipes(Uuid::new_v4(), 5).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_recommend_propagates_storage_failure() {
        let mut store = MockCatalogStore::new();
        store
            .expect_user_by_id()
            .returning(|_| Err(anyhow::anyhow!("connection reset").into()));

        let recommender = Recommender::new(
            Arc::new(store),
            Arc::new(NoSeasonality),
            RecommenderConfig::default(),
        );

        let result = recommender.recommend_for_user(Uuid::new_v4(), 10, false).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn test_seasonal_recommendations_empty_corpus() {
        let mut store = MockCatalogStore::new();
        store.expect_all_recipes().returning(|| Ok(Vec::new()));

        let recommender = Recommender::new(
            Arc::new(store),
            Arc::new(NoSeasonality),
            RecommenderConfig::default(),
        );

        let recipes = recommender.seasonal_recommendations(10).await.unwrap();
        assert!(recipes.is_empty());
    }
}
