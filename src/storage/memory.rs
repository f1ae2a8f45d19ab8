use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Interaction, Recipe, UserProfile};

use super::CatalogStore;

/// In-process catalog store
///
/// Backs the integration tests and lets embedders run the engine without a
/// database. Interaction writes follow upsert semantics: one record per
/// (user, recipe) pair, views incrementing in place.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, UserProfile>,
    recipes: HashMap<Uuid, Recipe>,
    interactions: HashMap<(Uuid, Uuid), Interaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: UserProfile) {
        let mut inner = self.inner.write().await;
        inner.users.insert(user.id, user);
    }

    pub async fn add_recipe(&self, recipe: Recipe) {
        let mut inner = self.inner.write().await;
        inner.recipes.insert(recipe.id, recipe);
    }

    /// Records a recipe view for a user
    ///
    /// Increments the view count on the existing interaction record, or
    /// creates one with a count of 1.
    pub async fn record_view(&self, user_id: Uuid, recipe_id: Uuid) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        Self::check_identities(&inner, user_id, recipe_id)?;

        inner
            .interactions
            .entry((user_id, recipe_id))
            .and_modify(|interaction| {
                interaction.view_count += 1;
                interaction.last_interaction = Utc::now();
            })
            .or_insert_with(|| Interaction::first_view(user_id, recipe_id));

        Ok(())
    }

    /// Marks a recipe as saved or unsaved for a user
    ///
    /// Creates the interaction record (with a single view) if the user has
    /// never viewed the recipe.
    pub async fn set_saved(&self, user_id: Uuid, recipe_id: Uuid, saved: bool) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        Self::check_identities(&inner, user_id, recipe_id)?;

        inner
            .interactions
            .entry((user_id, recipe_id))
            .and_modify(|interaction| {
                interaction.saved = saved;
                interaction.last_interaction = Utc::now();
            })
            .or_insert_with(|| {
                let mut interaction = Interaction::first_view(user_id, recipe_id);
                interaction.saved = saved;
                interaction
            });

        Ok(())
    }

    fn check_identities(inner: &Inner, user_id: Uuid, recipe_id: Uuid) -> AppResult<()> {
        if !inner.users.contains_key(&user_id) {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }
        if !inner.recipes.contains_key(&recipe_id) {
            return Err(AppError::NotFound(format!("Recipe {} not found", recipe_id)));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for MemoryStore {
    async fn user_by_id(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&user_id).cloned())
    }

    async fn all_users(&self) -> AppResult<Vec<UserProfile>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn recipe_by_id(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>> {
        let inner = self.inner.read().await;
        Ok(inner.recipes.get(&recipe_id).cloned())
    }

    async fn all_recipes(&self) -> AppResult<Vec<Recipe>> {
        let inner = self.inner.read().await;
        Ok(inner.recipes.values().cloned().collect())
    }

    async fn recipes_by_ids(&self, recipe_ids: Vec<Uuid>) -> AppResult<Vec<Recipe>> {
        let inner = self.inner.read().await;
        Ok(recipe_ids
            .iter()
            .filter_map(|id| inner.recipes.get(id).cloned())
            .collect())
    }

    async fn interactions_for_user(&self, user_id: Uuid) -> AppResult<Vec<Interaction>> {
        let inner = self.inner.read().await;
        Ok(inner
            .interactions
            .values()
            .filter(|interaction| interaction.user_id == user_id)
            .cloned()
            .collect())
    }
}
