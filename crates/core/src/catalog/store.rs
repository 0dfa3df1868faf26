//! In-memory catalog store seeded with the curated featured boxes.

use super::types::{Categories, GiftBox, GiftBoxDetail};
use crate::errors::DomainError;

/// Seed row for the featured catalog, kept as static data and expanded into
/// owned [`GiftBox`] records when the store is built.
#[derive(Debug, Clone, Copy)]
struct BoxSeed {
    slug: &'static str,
    name: &'static str,
    price: u32,
    thumbnail_url: &'static str,
    gradient_colors: [&'static str; 2],
    items: &'static [&'static str],
    mood: &'static str,
    occasions: &'static [&'static str],
    relationships: &'static [&'static str],
    description: &'static str,
}

const BOX_SEEDS: &[BoxSeed] = &[
    BoxSeed {
        slug: "joy-box",
        name: "Joy Box",
        price: 1899,
        thumbnail_url:
            "https://images.unsplash.com/photo-1520975682031-6de9d3f7d89c?q=80&w=1200&auto=format&fit=crop",
        gradient_colors: ["#FFD6E0", "#E8DFF5"],
        items: &[
            "Rose-scented candle",
            "Handwritten note",
            "Almond cookies",
            "Mini dried bouquet",
        ],
        mood: "happy",
        occasions: &["birthday", "graduation"],
        relationships: &["friends", "for her"],
        description: "A bright little bundle of small joys for sunny days.",
    },
    BoxSeed {
        slug: "calm-box",
        name: "Calm Box",
        price: 2199,
        thumbnail_url:
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop",
        gradient_colors: ["#B9F3E4", "#E8DFF5"],
        items: &["Lavender mist", "Chamomile tea", "Satin scrunchie", "Journaling pen"],
        mood: "calm",
        occasions: &["self-love"],
        relationships: &["parents", "for her"],
        description: "Slow-evening essentials for unwinding and quiet care.",
    },
    BoxSeed {
        slug: "love-box",
        name: "Love Box",
        price: 2499,
        thumbnail_url:
            "https://images.unsplash.com/photo-1519682577862-22b62b24e493?q=80&w=1200&auto=format&fit=crop",
        gradient_colors: ["#FFD6E0", "#F4D9B3"],
        items: &["Silk ribbon", "Chocolate truffles", "Rose oil", "Polaroid frame"],
        mood: "romantic",
        occasions: &["anniversary", "birthday"],
        relationships: &["for him", "for her"],
        description: "Rosy keepsakes and sweet things for someone dear.",
    },
    BoxSeed {
        slug: "celebration-box",
        name: "Celebration Box",
        price: 2799,
        thumbnail_url:
            "https://images.unsplash.com/photo-1513151233558-d860c5398176?q=80&w=1200&auto=format&fit=crop",
        gradient_colors: ["#FFF7E9", "#F4D9B3"],
        items: &["Confetti popper", "Sparkle topper", "Vanilla cupcake mix", "Note card"],
        mood: "festive",
        occasions: &["birthday", "graduation"],
        relationships: &["friends", "parents"],
        description: "Confetti-ready treats for marking the big moments.",
    },
];

const MOOD_CATEGORIES: &[&str] = &["happy", "calm", "romantic", "festive", "sad", "self-love"];
const RELATIONSHIP_CATEGORIES: &[&str] = &["for him", "for her", "parents", "friends"];
const OCCASION_CATEGORIES: &[&str] = &["birthday", "anniversary", "graduation", "self-love"];

/// Decorative gallery images shared by every box detail view. The pair is
/// intentionally identical across boxes; downstream fixtures depend on the
/// exact URLs.
const DECOR_GALLERY_URLS: [&str; 2] = [
    "https://images.unsplash.com/photo-1522673607200-164d1b6ce486?q=80&w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1549465220-1a8b9238cd48?q=80&w=1200&auto=format&fit=crop",
];

const RIBBON_OPTIONS: &[&str] = &["Classic satin", "Dried flower", "Minimal twine"];
const ESTIMATED_DELIVERY: &str = "2-4 days";
const DETAIL_RATING: f64 = 4.8;
const DETAIL_REVIEW_COUNT: u32 = 126;

/// Read-only catalog of featured gift boxes.
///
/// Built once at startup from static seed data and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    boxes: Vec<GiftBox>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let boxes = BOX_SEEDS
            .iter()
            .map(|seed| GiftBox {
                slug: seed.slug.to_owned(),
                name: seed.name.to_owned(),
                price: seed.price,
                thumbnail_url: seed.thumbnail_url.to_owned(),
                gradient_colors: [
                    seed.gradient_colors[0].to_owned(),
                    seed.gradient_colors[1].to_owned(),
                ],
                items: seed.items.iter().map(|item| (*item).to_owned()).collect(),
                mood: seed.mood.to_owned(),
                occasions: seed.occasions.iter().map(|tag| (*tag).to_owned()).collect(),
                relationships: seed.relationships.iter().map(|tag| (*tag).to_owned()).collect(),
                description: seed.description.to_owned(),
            })
            .collect();
        Self { boxes }
    }

    /// All featured boxes in stable insertion order.
    pub fn list_all(&self) -> &[GiftBox] {
        &self.boxes
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<&GiftBox, DomainError> {
        self.boxes
            .iter()
            .find(|entry| entry.slug == slug)
            .ok_or_else(|| DomainError::BoxNotFound { slug: slug.to_owned() })
    }

    /// The fixed category enumerations served alongside the catalog.
    pub fn categories(&self) -> Categories {
        Categories {
            moods: MOOD_CATEGORIES.iter().map(|tag| (*tag).to_owned()).collect(),
            relationships: RELATIONSHIP_CATEGORIES.iter().map(|tag| (*tag).to_owned()).collect(),
            occasions: OCCASION_CATEGORIES.iter().map(|tag| (*tag).to_owned()).collect(),
        }
    }

    /// Look up a box by slug and enrich it with the synthetic display fields.
    pub fn detail(&self, slug: &str) -> Result<GiftBoxDetail, DomainError> {
        let gift_box = self.find_by_slug(slug)?.clone();
        let gallery = vec![
            gift_box.thumbnail_url.clone(),
            DECOR_GALLERY_URLS[0].to_owned(),
            DECOR_GALLERY_URLS[1].to_owned(),
        ];

        Ok(GiftBoxDetail {
            gift_box,
            gallery,
            ribbon_options: RIBBON_OPTIONS.iter().map(|opt| (*opt).to_owned()).collect(),
            estimated_delivery: ESTIMATED_DELIVERY.to_owned(),
            rating: DETAIL_RATING,
            review_count: DETAIL_REVIEW_COUNT,
        })
    }
}
