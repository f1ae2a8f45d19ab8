use std::collections::HashSet;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalized ingredient kind token (e.g. "TOMATO")
///
/// Each ingredient instance reduces to a kind for similarity purposes; two
/// recipes both containing tomatoes overlap on `TOMATO` regardless of how the
/// ingredient line is written. Construction uppercases and trims the raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientKind(String);

impl IngredientKind {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IngredientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single ingredient line within a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Kind token used for similarity and preference matching
    pub kind: IngredientKind,
    /// Display name as the author wrote it (e.g. "cherry tomatoes")
    pub name: String,
    pub amount: f64,
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(kind: IngredientKind, name: String, amount: f64, unit: Option<String>) -> Self {
        Self {
            kind,
            name,
            amount,
            unit,
        }
    }
}

/// A recipe in the catalog
///
/// Immutable snapshot for the duration of a scoring pass; ownership and
/// mutation belong to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    /// Username of the author
    pub author: String,
    pub ingredients: Vec<Ingredient>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub prep_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new recipe with a fresh identity
    pub fn new(title: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            ingredients: Vec::new(),
            category: None,
            cuisine: None,
            difficulty: None,
            prep_time_minutes: None,
            servings: None,
            created_at: Utc::now(),
        }
    }

    /// The deduplicated set of ingredient kinds in this recipe
    ///
    /// Similarity and preference matching operate on this set, never on the
    /// raw ingredient lines.
    pub fn ingredient_kinds(&self) -> HashSet<&IngredientKind> {
        self.ingredients.iter().map(|i| &i.kind).collect()
    }
}
