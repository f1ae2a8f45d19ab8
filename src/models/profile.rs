use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::IngredientKind;

/// Explicit, typed user preferences
///
/// Every scoring rule reads a named field here; there is deliberately no
/// open string-keyed map, so a new preference dimension requires touching
/// both this struct and the preference scorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserPreferences {
    pub preferred_categories: HashSet<String>,
    pub preferred_cuisines: HashSet<String>,
    pub favorite_ingredients: HashSet<IngredientKind>,
    pub disliked_ingredients: HashSet<IngredientKind>,
    /// Ceiling on acceptable prep time, in minutes
    pub max_prep_time_minutes: Option<u32>,
    pub difficulty_preference: Option<String>,
    /// Whether in-season recipes should get a scoring boost
    pub prefer_seasonal: bool,
}

/// A user of the recipe catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a new profile with empty preferences
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            preferences: UserPreferences::default(),
            created_at: Utc::now(),
        }
    }
}
