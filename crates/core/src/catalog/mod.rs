//! Featured gift box catalog
//!
//! An immutable, in-memory product catalog seeded once at startup, plus the
//! faceted lookup logic and the per-request detail enrichment.

mod facets;
mod store;
mod types;

pub use facets::query_by_facet;
pub use store::Catalog;
pub use types::{Categories, FacetType, GiftBox, GiftBoxDetail};
