//! Domain model: recipes, user profiles, and interaction records
//!
//! These are read-only snapshots from the engine's point of view; the
//! persistence collaborator owns their lifecycle.

mod interaction;
mod profile;
mod recipe;

pub use interaction::Interaction;
pub use profile::{UserPreferences, UserProfile};
pub use recipe::{Ingredient, IngredientKind, Recipe};
