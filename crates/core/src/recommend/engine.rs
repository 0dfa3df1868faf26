//! Rule-based recommendation engine implementation

use super::types::{Recommendation, RecommendationIntent, SuggestionItem};
use super::{DEFAULT_MOOD, FALLBACK_CONTEXT, MAX_RESULTS};

/// Seed row for the static mood-keyed suggestion pools.
#[derive(Debug, Clone, Copy)]
struct ItemSeed {
    title: &'static str,
    price: u32,
    tag: &'static str,
}

const HAPPY_POOL: &[ItemSeed] = &[
    ItemSeed { title: "Sunshine Candle", price: 699, tag: "cheer" },
    ItemSeed { title: "Berry Truffles", price: 499, tag: "treat" },
    ItemSeed { title: "Mini Bouquet", price: 799, tag: "flowers" },
];

const CALM_POOL: &[ItemSeed] = &[
    ItemSeed { title: "Lavender Mist", price: 749, tag: "relax" },
    ItemSeed { title: "Chamomile Tea Set", price: 549, tag: "soothe" },
    ItemSeed { title: "Soft Eye Mask", price: 399, tag: "sleep" },
];

const ROMANTIC_POOL: &[ItemSeed] = &[
    ItemSeed { title: "Rose Oil", price: 999, tag: "romance" },
    ItemSeed { title: "Silk Ribbon Wrap", price: 299, tag: "wrap" },
    ItemSeed { title: "Love Notes Set", price: 399, tag: "note" },
];

const FESTIVE_POOL: &[ItemSeed] = &[
    ItemSeed { title: "Confetti Popper", price: 299, tag: "party" },
    ItemSeed { title: "Vanilla Cupcake Mix", price: 499, tag: "bake" },
    ItemSeed { title: "Sparkle Topper", price: 349, tag: "sparkle" },
];

const SAD_POOL: &[ItemSeed] = &[
    ItemSeed { title: "Warm Hug Mug", price: 599, tag: "comfort" },
    ItemSeed { title: "Kind Notes", price: 349, tag: "uplift" },
    ItemSeed { title: "Self-care Mask", price: 299, tag: "care" },
];

const SELF_LOVE_POOL: &[ItemSeed] = &[
    ItemSeed { title: "Jade Roller", price: 899, tag: "glow" },
    ItemSeed { title: "Affirmation Cards", price: 499, tag: "affirm" },
    ItemSeed { title: "Bath Salt", price: 399, tag: "soak" },
];

/// Finite mood-key dispatch; unknown keys yield an empty pool, silently.
fn mood_pool(mood: &str) -> &'static [ItemSeed] {
    match mood {
        "happy" => HAPPY_POOL,
        "calm" => CALM_POOL,
        "romantic" => ROMANTIC_POOL,
        "festive" => FESTIVE_POOL,
        "sad" => SAD_POOL,
        "self-love" => SELF_LOVE_POOL,
        _ => &[],
    }
}

fn fold(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

/// Deterministic rule-based gift recommender.
///
/// A pure function of the intent and the static mood pools: same input,
/// same output, no hidden randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, intent: &RecommendationIntent) -> Recommendation {
        let mood = fold(intent.mood.as_deref());
        let occasion = fold(intent.occasion.as_deref());
        let relationship = fold(intent.relationship.as_deref());

        let lookup_key = if mood.is_empty() { DEFAULT_MOOD } else { mood.as_str() };
        let candidates = mood_pool(lookup_key);

        let min = intent.min_budget.unwrap_or(0);
        let max = intent.max_budget.unwrap_or(u32::MAX);
        let budget_bounded = intent.min_budget.is_some() || intent.max_budget.is_some();

        let results = candidates
            .iter()
            .filter(|item| !budget_bounded || (min <= item.price && item.price <= max))
            .take(MAX_RESULTS)
            .map(|item| SuggestionItem {
                title: item.title.to_owned(),
                price: item.price,
                tag: item.tag.to_owned(),
            })
            .collect();

        let context_bits: Vec<&str> = [mood.as_str(), occasion.as_str(), relationship.as_str()]
            .into_iter()
            .filter(|bit| !bit.is_empty())
            .collect();
        let context = if context_bits.is_empty() {
            FALLBACK_CONTEXT.to_owned()
        } else {
            context_bits.join(", ")
        };

        Recommendation { context, query: intent.query.clone(), results }
    }
}
