//! Types for the recommendation engine

use serde::{Deserialize, Serialize};

/// Structured gift intent parsed from a user's free-form request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationIntent {
    /// Free-form search text, echoed back but never used for ranking
    pub query: Option<String>,
    /// Mood such as happy, calm, romantic, sad, self-love
    pub mood: Option<String>,
    pub occasion: Option<String>,
    pub relationship: Option<String>,
    /// Inclusive lower price bound in minor units
    pub min_budget: Option<u32>,
    /// Inclusive upper price bound in minor units
    pub max_budget: Option<u32>,
}

impl RecommendationIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = Some(relationship.into());
        self
    }

    pub fn with_budget(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_budget = min;
        self.max_budget = max;
        self
    }
}

/// A single recommended add-on product, distinct from a catalog gift box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub title: String,
    /// Price in minor units, always positive
    pub price: u32,
    /// Short category label
    pub tag: String,
}

/// Ranked, budget-filtered recommendation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Human-readable context label derived from the intent
    pub context: String,
    /// The free-form query, passed through unchanged
    pub query: Option<String>,
    pub results: Vec<SuggestionItem>,
}
