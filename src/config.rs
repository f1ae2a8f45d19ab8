use serde::Deserialize;

/// Recommendation engine tuning knobs, loaded from environment variables
///
/// Every weight the scorers use lives here as a named field rather than a
/// magic number, so individual terms can be tuned or pinned in tests. The
/// defaults reproduce the production scoring behavior.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RecommenderConfig {
    /// Weight of the content-based score in the hybrid combination
    #[serde(default = "default_content_weight")]
    pub content_weight: f64,

    /// Weight of the collaborative-filtering score in the hybrid combination
    #[serde(default = "default_collaborative_weight")]
    pub collaborative_weight: f64,

    /// Weight of the preference-match score in the hybrid combination
    #[serde(default = "default_preference_weight")]
    pub preference_weight: f64,

    /// Weight of ingredient-set Jaccard overlap in recipe-pair similarity
    #[serde(default = "default_ingredient_weight")]
    pub ingredient_weight: f64,

    /// Weight of an exact category match in recipe-pair similarity
    #[serde(default = "default_category_weight")]
    pub category_weight: f64,

    /// Weight of an exact cuisine match in recipe-pair similarity
    #[serde(default = "default_cuisine_weight")]
    pub cuisine_weight: f64,

    /// How many of the user's most-viewed recipes anchor the content scorer
    #[serde(default = "default_max_anchor_recipes")]
    pub max_anchor_recipes: usize,

    /// How many behaviorally similar users the collaborative scorer retains
    #[serde(default = "default_max_similar_users")]
    pub max_similar_users: usize,

    /// Preference boost for a recipe in one of the user's preferred categories
    #[serde(default = "default_category_match_boost")]
    pub category_match_boost: f64,

    /// Preference boost for a recipe in one of the user's preferred cuisines
    #[serde(default = "default_cuisine_match_boost")]
    pub cuisine_match_boost: f64,

    /// Preference boost per favorite ingredient kind present in the recipe
    #[serde(default = "default_favorite_ingredient_boost")]
    pub favorite_ingredient_boost: f64,

    /// Preference penalty per disliked ingredient kind present in the recipe
    #[serde(default = "default_disliked_ingredient_penalty")]
    pub disliked_ingredient_penalty: f64,

    /// Preference boost when recipe difficulty equals the user's preference
    #[serde(default = "default_difficulty_match_boost")]
    pub difficulty_match_boost: f64,

    /// Preference boost when prep time fits within the user's ceiling
    #[serde(default = "default_prep_time_boost")]
    pub prep_time_boost: f64,

    /// Maximum preference boost from seasonality (scaled by seasonal score)
    #[serde(default = "default_seasonal_boost")]
    pub seasonal_boost: f64,
}

fn default_content_weight() -> f64 {
    0.4
}

fn default_collaborative_weight() -> f64 {
    0.3
}

fn default_preference_weight() -> f64 {
    0.3
}

fn default_ingredient_weight() -> f64 {
    0.6
}

fn default_category_weight() -> f64 {
    0.2
}

fn default_cuisine_weight() -> f64 {
    0.2
}

fn default_max_anchor_recipes() -> usize {
    5
}

fn default_max_similar_users() -> usize {
    10
}

fn default_category_match_boost() -> f64 {
    0.4
}

fn default_cuisine_match_boost() -> f64 {
    0.4
}

fn default_favorite_ingredient_boost() -> f64 {
    0.2
}

fn default_disliked_ingredient_penalty() -> f64 {
    0.5
}

fn default_difficulty_match_boost() -> f64 {
    0.3
}

fn default_prep_time_boost() -> f64 {
    0.3
}

fn default_seasonal_boost() -> f64 {
    0.5
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            content_weight: default_content_weight(),
            collaborative_weight: default_collaborative_weight(),
            preference_weight: default_preference_weight(),
            ingredient_weight: default_ingredient_weight(),
            category_weight: default_category_weight(),
            cuisine_weight: default_cuisine_weight(),
            max_anchor_recipes: default_max_anchor_recipes(),
            max_similar_users: default_max_similar_users(),
            category_match_boost: default_category_match_boost(),
            cuisine_match_boost: default_cuisine_match_boost(),
            favorite_ingredient_boost: default_favorite_ingredient_boost(),
            disliked_ingredient_penalty: default_disliked_ingredient_penalty(),
            difficulty_match_boost: default_difficulty_match_boost(),
            prep_time_boost: default_prep_time_boost(),
            seasonal_boost: default_seasonal_boost(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from environment variables
    ///
    /// Variables use the field names uppercased (e.g. `CONTENT_WEIGHT=0.5`).
    /// Any variable left unset falls back to its default.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<RecommenderConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
