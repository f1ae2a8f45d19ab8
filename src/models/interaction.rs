use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Multiplier applied to interaction strength when the recipe is saved
const SAVED_STRENGTH_MULTIPLIER: f64 = 2.0;

/// A user's accumulated engagement with one recipe
///
/// Storage keeps at most one record per (user, recipe) pair: repeat views
/// increment `view_count` on the existing record rather than inserting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub view_count: u32,
    pub saved: bool,
    pub first_interaction: DateTime<Utc>,
    pub last_interaction: DateTime<Utc>,
}

impl Interaction {
    /// Creates a record for a first view
    pub fn first_view(user_id: Uuid, recipe_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            recipe_id,
            view_count: 1,
            saved: false,
            first_interaction: now,
            last_interaction: now,
        }
    }

    /// Weighted engagement measure: `view_count`, doubled when saved
    pub fn strength(&self) -> f64 {
        let multiplier = if self.saved {
            SAVED_STRENGTH_MULTIPLIER
        } else {
            1.0
        };
        f64::from(self.view_count) * multiplier
    }
}
