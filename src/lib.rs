//! forkcast: hybrid recipe recommendation engine
//!
//! Combines three independent signal sources into one ranked list per user:
//! content similarity to the recipes they engage with most, collaborative
//! filtering over behaviorally similar users, and matching against their
//! explicitly declared preferences. The same similarity primitives back two
//! related queries: recipes similar to a given one, and recipes currently in
//! season.
//!
//! The engine is deterministic, stateless-per-request computation over
//! snapshots read through the [`storage::CatalogStore`] trait; persistence,
//! request handling, and the seasonality calendar are external collaborators.
//!
//! ```no_run
//! use std::sync::Arc;
//! use forkcast::config::RecommenderConfig;
//! use forkcast::seasonality::NoSeasonality;
//! use forkcast::services::Recommender;
//! use forkcast::storage::MemoryStore;
//!
//! # async fn example() -> forkcast::error::AppResult<()> {
//! let store = Arc::new(MemoryStore::new());
//! let recommender = Recommender::new(
//!     store,
//!     Arc::new(NoSeasonality),
//!     RecommenderConfig::default(),
//! );
//! let user_id = uuid::Uuid::new_v4();
//! let picks = recommender.recommend_for_user(user_id, 10, false).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod seasonality;
pub mod services;
pub mod storage;

pub use config::RecommenderConfig;
pub use error::{AppError, AppResult};
pub use models::{Ingredient, IngredientKind, Interaction, Recipe, UserPreferences, UserProfile};
pub use seasonality::SeasonalityProvider;
pub use services::Recommender;
pub use storage::CatalogStore;
