//! Types for the gift box catalog

use serde::{Deserialize, Serialize};

/// A curated gift box as it appears in the featured catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftBox {
    /// Stable unique identifier
    pub slug: String,
    pub name: String,
    /// Price in minor currency units, always positive
    pub price: u32,
    pub thumbnail_url: String,
    /// Ordered gradient color pair, rendering hint only
    pub gradient_colors: [String; 2],
    /// Ordered description of box contents
    pub items: Vec<String>,
    /// Single tag from the closed mood set
    pub mood: String,
    pub occasions: Vec<String>,
    pub relationships: Vec<String>,
    pub description: String,
}

/// A gift box enriched with presentation-only display fields.
///
/// Constructed per request from a [`GiftBox`]; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftBoxDetail {
    #[serde(flatten)]
    pub gift_box: GiftBox,
    /// The box's own thumbnail first, then two shared decorative images
    pub gallery: Vec<String>,
    pub ribbon_options: Vec<String>,
    pub estimated_delivery: String,
    pub rating: f64,
    pub review_count: u32,
}

/// The fixed category enumerations served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub moods: Vec<String>,
    pub relationships: Vec<String>,
    pub occasions: Vec<String>,
}

/// A categorical tag dimension used to filter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetType {
    Moods,
    Occasions,
    Relationships,
}

impl std::str::FromStr for FacetType {
    type Err = crate::errors::DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "moods" => Ok(Self::Moods),
            "occasions" => Ok(Self::Occasions),
            "relationships" => Ok(Self::Relationships),
            _ => Err(crate::errors::DomainError::InvalidFacetType {
                given: value.trim().to_owned(),
            }),
        }
    }
}
