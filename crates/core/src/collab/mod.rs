//! Collaborator ports
//!
//! Trait seams for the external systems the service talks to at its
//! boundary: the document store backing order persistence, the payment
//! provider, and the transactional mailer. The shipped implementations are
//! in-process (in-memory store, mock payments, no-op mail); swapping in a
//! real backend means implementing the trait, not touching the engines.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::ApplicationError;

/// Identifier assigned to a newly created document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentId(pub Uuid);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Generic "create a document in a named collection" persistence boundary.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_document(
        &self,
        collection: &str,
        fields: serde_json::Value,
    ) -> Result<DocumentId, ApplicationError>;

    /// Names of the collections currently holding documents, for health
    /// introspection.
    async fn list_collections(&self) -> Result<Vec<String>, ApplicationError>;
}

/// Opaque reference handed back by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReference(pub String);

pub trait PaymentGateway: Send + Sync {
    fn create_reference(&self, amount: u32) -> PaymentReference;
}

/// Fire-and-forget transactional email boundary.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_confirmation(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), ApplicationError>;
}

/// Process-local document store backed by a mutexed collection map.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<(DocumentId, serde_json::Value)>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection; absent collections count zero.
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .map(|map| map.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        fields: serde_json::Value,
    ) -> Result<DocumentId, ApplicationError> {
        let id = DocumentId(Uuid::new_v4());
        let mut map = self
            .collections
            .lock()
            .map_err(|_| ApplicationError::Persistence("document store lock poisoned".into()))?;
        map.entry(collection.to_owned()).or_default().push((id, fields));
        Ok(id)
    }

    async fn list_collections(&self) -> Result<Vec<String>, ApplicationError> {
        let map = self
            .collections
            .lock()
            .map_err(|_| ApplicationError::Persistence("document store lock poisoned".into()))?;
        let mut names: Vec<String> = map.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Mock payment provider producing opaque `pay_` references.
#[derive(Debug, Default)]
pub struct MockPaymentGateway;

impl PaymentGateway for MockPaymentGateway {
    fn create_reference(&self, _amount: u32) -> PaymentReference {
        PaymentReference(format!("pay_{}", Uuid::new_v4().simple()))
    }
}

/// Mailer that acknowledges every dispatch without sending anything.
#[derive(Debug, Default)]
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send_confirmation(
        &self,
        _to: &str,
        _subject: &str,
        _body: &str,
    ) -> Result<(), ApplicationError> {
        Ok(())
    }
}
