//! Persistence collaborator abstraction
//!
//! The engine reads recipes, profiles, and interactions through the
//! [`CatalogStore`] trait and never writes them back. Production deployments
//! implement this over their database; [`MemoryStore`] is an in-process
//! implementation for tests and embedders.

use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Interaction, Recipe, UserProfile};

pub mod memory;

pub use memory::MemoryStore;

/// Read interface to the recipe catalog's backing store
///
/// All methods are bulk snapshot reads; consistency and isolation are the
/// implementor's responsibility. Implementations must uphold the invariant
/// of at most one interaction record per (user, recipe) pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch a user profile by identity, `None` if unknown
    async fn user_by_id(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Fetch every user profile in the system
    async fn all_users(&self) -> AppResult<Vec<UserProfile>>;

    /// Fetch a recipe by identity, `None` if unknown
    async fn recipe_by_id(&self, recipe_id: Uuid) -> AppResult<Option<Recipe>>;

    /// Fetch the full recipe corpus
    async fn all_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Fetch recipes for the given identities
    ///
    /// Unknown identities are skipped. No ordering guarantee: callers that
    /// care about order must re-sort the result themselves.
    async fn recipes_by_ids(&self, recipe_ids: Vec<Uuid>) -> AppResult<Vec<Recipe>>;

    /// Fetch all interaction records for one user
    async fn interactions_for_user(&self, user_id: Uuid) -> AppResult<Vec<Interaction>>;
}
