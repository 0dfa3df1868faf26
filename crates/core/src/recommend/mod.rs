//! Gift Recommendation Engine
//!
//! Deterministic rule-based recommender that maps a structured gift intent
//! (mood, occasion, relationship, budget bounds) to a ranked, budget-filtered
//! slice of a static mood-keyed suggestion pool.

mod engine;
mod types;

pub use engine::RecommendationEngine;
pub use types::{Recommendation, RecommendationIntent, SuggestionItem};

/// Mood key used when the intent carries no mood
pub const DEFAULT_MOOD: &str = "happy";

/// Context label used when mood, occasion and relationship are all absent
pub const FALLBACK_CONTEXT: &str = "thoughtful";

/// Maximum suggestions to return
pub const MAX_RESULTS: usize = 5;
