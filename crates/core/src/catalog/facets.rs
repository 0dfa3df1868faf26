//! Faceted lookup over the catalog.
//!
//! Matching is case-insensitive exact equality: the `moods` facet compares
//! against a box's single mood tag, while `occasions` and `relationships`
//! compare against set membership. Results preserve catalog insertion order
//! and an empty result is valid.

use super::store::Catalog;
use super::types::{FacetType, GiftBox};
use crate::errors::DomainError;

pub fn query_by_facet<'a>(
    catalog: &'a Catalog,
    facet_type: &str,
    facet_key: &str,
) -> Result<Vec<&'a GiftBox>, DomainError> {
    let facet_type: FacetType = facet_type.parse()?;
    let key = facet_key.trim().to_lowercase();

    let matches = catalog
        .list_all()
        .iter()
        .filter(|entry| match facet_type {
            FacetType::Moods => entry.mood.to_lowercase() == key,
            FacetType::Occasions => {
                entry.occasions.iter().any(|tag| tag.to_lowercase() == key)
            }
            FacetType::Relationships => {
                entry.relationships.iter().any(|tag| tag.to_lowercase() == key)
            }
        })
        .collect();

    Ok(matches)
}
