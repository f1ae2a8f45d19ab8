//! Recommendation engine internals
//!
//! Three independent scoring passes (content-based, collaborative,
//! preference-match) feed the hybrid combiner in [`recommender`]. Each pass
//! produces a [`ScoreMap`] over candidate recipe ids; the maps live for one
//! request and are never persisted.

use std::collections::HashMap;

use uuid::Uuid;

pub mod collaborative;
pub mod content;
pub mod preference;
pub mod recommender;
pub mod similarity;

pub use recommender::Recommender;

/// Ephemeral recipe-id to score mapping produced by one scoring pass
pub type ScoreMap = HashMap<Uuid, f64>;
