pub mod catalog;
pub mod collab;
pub mod config;
pub mod errors;
pub mod message;
pub mod recommend;

pub use catalog::{query_by_facet, Catalog, Categories, FacetType, GiftBox, GiftBoxDetail};
pub use collab::{
    DocumentId, DocumentStore, InMemoryDocumentStore, Mailer, MockPaymentGateway, NoopMailer,
    PaymentGateway, PaymentReference,
};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use message::{compose, ComposedMessage, MessageIntent};
pub use recommend::{Recommendation, RecommendationEngine, RecommendationIntent, SuggestionItem};
