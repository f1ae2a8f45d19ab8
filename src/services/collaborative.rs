use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::config::RecommenderConfig;
use crate::models::Interaction;
use crate::services::similarity::jaccard;
use crate::services::ScoreMap;

/// Collaborative-filtering scores: engagement propagated from similar users
///
/// User similarity is the Jaccard overlap of interacted-recipe-id sets. Only
/// users with positive similarity count, capped at `max_similar_users`. Each
/// retained neighbor contributes `similarity * interaction.strength()` to
/// every non-excluded recipe they touched, and the accumulated scores are
/// normalized by the maximum into [0, 1]. The normalization requires a full
/// pass over all neighbors before any score is final.
pub fn collaborative_scores(
    target_id: Uuid,
    interactions_by_user: &HashMap<Uuid, Vec<Interaction>>,
    excluded: &HashSet<Uuid>,
    config: &RecommenderConfig,
) -> ScoreMap {
    let mut scores = ScoreMap::new();

    let target_recipes: HashSet<Uuid> = interactions_by_user
        .get(&target_id)
        .map(|interactions| interactions.iter().map(|i| i.recipe_id).collect())
        .unwrap_or_default();

    // Behavioral similarity to every other user, keeping positives only
    let mut neighbors: Vec<(Uuid, f64)> = interactions_by_user
        .iter()
        .filter(|(user_id, _)| **user_id != target_id)
        .filter_map(|(user_id, interactions)| {
            let their_recipes: HashSet<Uuid> =
                interactions.iter().map(|i| i.recipe_id).collect();
            let similarity = jaccard(&target_recipes, &their_recipes);
            (similarity > 0.0).then_some((*user_id, similarity))
        })
        .collect();

    // Most similar first; user id breaks exact ties deterministically
    neighbors.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    neighbors.truncate(config.max_similar_users);

    for (neighbor_id, user_similarity) in &neighbors {
        let Some(interactions) = interactions_by_user.get(neighbor_id) else {
            continue;
        };

        for interaction in interactions {
            if excluded.contains(&interaction.recipe_id) {
                continue;
            }

            *scores.entry(interaction.recipe_id).or_insert(0.0) +=
                user_similarity * interaction.strength();
        }
    }

    normalize(&mut scores);
    scores
}

/// Divides every score by the maximum, producing a [0, 1] range
///
/// No-op when the map is empty or the maximum is 0.
fn normalize(scores: &mut ScoreMap) {
    let max = scores.values().cloned().fold(f64::MIN, f64::max);
    if scores.is_empty() || max <= 0.0 {
        return;
    }
    for score in scores.values_mut() {
        *score /= max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(user_id: Uuid, recipe_id: Uuid, view_count: u32, saved: bool) -> Interaction {
        let mut interaction = Interaction::first_view(user_id, recipe_id);
        interaction.view_count = view_count;
        interaction.saved = saved;
        interaction
    }

    fn by_user(interactions: Vec<Interaction>) -> HashMap<Uuid, Vec<Interaction>> {
        let mut map: HashMap<Uuid, Vec<Interaction>> = HashMap::new();
        for i in interactions {
            map.entry(i.user_id).or_default().push(i);
        }
        map
    }

    #[test]
    fn test_disjoint_users_contribute_nothing() {
        let config = RecommenderConfig::default();
        let target = Uuid::new_v4();
        let other = Uuid::new_v4();
        let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());

        let interactions = by_user(vec![
            interaction(target, r1, 3, false),
            interaction(other, r2, 5, true),
        ]);

        let scores = collaborative_scores(target, &interactions, &HashSet::new(), &config);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_shared_history_propagates_engagement() {
        let config = RecommenderConfig::default();
        let target = Uuid::new_v4();
        let neighbor = Uuid::new_v4();
        let shared = Uuid::new_v4();
        let novel = Uuid::new_v4();

        let interactions = by_user(vec![
            interaction(target, shared, 2, false),
            interaction(neighbor, shared, 1, false),
            interaction(neighbor, novel, 4, false),
        ]);

        let excluded: HashSet<Uuid> = [shared].into_iter().collect();
        let scores = collaborative_scores(target, &interactions, &excluded, &config);

        assert_eq!(scores.len(), 1);
        // Single candidate normalizes to 1.0
        assert!((scores[&novel] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_saved_flag_doubles_contribution() {
        let config = RecommenderConfig::default();
        let target = Uuid::new_v4();
        let neighbor = Uuid::new_v4();
        let shared = Uuid::new_v4();
        let viewed = Uuid::new_v4();
        let saved = Uuid::new_v4();

        let interactions = by_user(vec![
            interaction(target, shared, 1, false),
            interaction(neighbor, shared, 1, false),
            interaction(neighbor, viewed, 2, false),
            interaction(neighbor, saved, 2, true),
        ]);

        let excluded: HashSet<Uuid> = [shared].into_iter().collect();
        let scores = collaborative_scores(target, &interactions, &excluded, &config);

        // saved strength 4.0 normalizes to 1.0, viewed strength 2.0 to 0.5
        assert!((scores[&saved] - 1.0).abs() < 1e-12);
        assert!((scores[&viewed] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scores_normalized_into_unit_range() {
        let config = RecommenderConfig::default();
        let target = Uuid::new_v4();
        let shared = Uuid::new_v4();

        let mut all = vec![interaction(target, shared, 1, false)];
        for _ in 0..4 {
            let neighbor = Uuid::new_v4();
            all.push(interaction(neighbor, shared, 1, false));
            all.push(interaction(neighbor, Uuid::new_v4(), 7, true));
        }
        let interactions = by_user(all);

        let excluded: HashSet<Uuid> = [shared].into_iter().collect();
        let scores = collaborative_scores(target, &interactions, &excluded, &config);

        assert!(!scores.is_empty());
        for score in scores.values() {
            assert!((0.0..=1.0).contains(score));
        }
        let max = scores.values().cloned().fold(f64::MIN, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_neighbor_cap_keeps_most_similar() {
        let mut config = RecommenderConfig::default();
        config.max_similar_users = 1;

        let target = Uuid::new_v4();
        let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());
        let close = Uuid::new_v4();
        let distant = Uuid::new_v4();
        let close_pick = Uuid::new_v4();
        let distant_pick = Uuid::new_v4();

        let interactions = by_user(vec![
            interaction(target, r1, 1, false),
            interaction(target, r2, 1, false),
            // Jaccard 2/3 with target
            interaction(close, r1, 1, false),
            interaction(close, r2, 1, false),
            interaction(close, close_pick, 1, false),
            // Jaccard 1/4 with target
            interaction(distant, r1, 1, false),
            interaction(distant, Uuid::new_v4(), 1, false),
            interaction(distant, Uuid::new_v4(), 1, false),
            interaction(distant, distant_pick, 1, false),
        ]);

        let excluded: HashSet<Uuid> = [r1, r2].into_iter().collect();
        let scores = collaborative_scores(target, &interactions, &excluded, &config);

        assert!(scores.contains_key(&close_pick));
        assert!(!scores.contains_key(&distant_pick));
    }

    #[test]
    fn test_target_with_no_interactions_gets_empty_map() {
        let config = RecommenderConfig::default();
        let target = Uuid::new_v4();
        let other = Uuid::new_v4();

        let interactions = by_user(vec![interaction(other, Uuid::new_v4(), 3, false)]);
        let scores = collaborative_scores(target, &interactions, &HashSet::new(), &config);
        assert!(scores.is_empty());
    }
}
