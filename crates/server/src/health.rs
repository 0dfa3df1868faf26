use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use bloombox_core::{Catalog, DocumentStore};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};

#[derive(Clone)]
pub struct HealthState {
    catalog: Arc<Catalog>,
    documents: Arc<dyn DocumentStore>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub document_store: HealthCheck,
    pub collections: Vec<String>,
    pub checked_at: String,
}

pub fn router(catalog: Arc<Catalog>, documents: Arc<dyn DocumentStore>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { catalog, documents })
}

pub async fn spawn(
    bind_address: &str,
    port: u16,
    catalog: Arc<Catalog>,
    documents: Arc<dyn DocumentStore>,
) -> std::io::Result<()> {
    let address = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.health.start",
        correlation_id = "bootstrap",
        bind_address = %address,
        "health endpoint started"
    );

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router(catalog, documents)).await {
            error!(
                event_name = "system.health.error",
                correlation_id = "bootstrap",
                error = %err,
                "health endpoint server terminated unexpectedly"
            );
        }
    });

    Ok(())
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog_check = catalog_check(&state.catalog);
    let (store_check, collections) = document_store_check(state.documents.as_ref()).await;
    let ready = catalog_check.status == "ready" && store_check.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "bloombox-server runtime initialized".to_string(),
        },
        catalog: catalog_check,
        document_store: store_check,
        collections,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(catalog: &Catalog) -> HealthCheck {
    let count = catalog.list_all().len();
    if count > 0 {
        HealthCheck { status: "ready", detail: format!("{count} featured boxes loaded") }
    } else {
        HealthCheck { status: "degraded", detail: "catalog is empty".to_string() }
    }
}

async fn document_store_check(documents: &dyn DocumentStore) -> (HealthCheck, Vec<String>) {
    match documents.list_collections().await {
        Ok(mut collections) => {
            collections.truncate(10);
            let check = HealthCheck {
                status: "ready",
                detail: "document store query succeeded".to_string(),
            };
            (check, collections)
        }
        Err(err) => {
            let check = HealthCheck {
                status: "degraded",
                detail: format!("document store query failed: {err}"),
            };
            (check, Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use bloombox_core::{Catalog, DocumentStore, InMemoryDocumentStore};
    use serde_json::json;

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_reports_ready_with_seeded_catalog() {
        let state = HealthState {
            catalog: Arc::new(Catalog::new()),
            documents: Arc::new(InMemoryDocumentStore::new()),
        };

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.catalog.status, "ready");
        assert_eq!(payload.document_store.status, "ready");
        assert!(payload.collections.is_empty());
    }

    #[tokio::test]
    async fn health_lists_collections_once_documents_exist() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store.create_document("orders", json!({})).await.expect("create");

        let state = HealthState { catalog: Arc::new(Catalog::new()), documents: store };
        let (_, Json(payload)) = health(State(state)).await;

        assert_eq!(payload.collections, vec!["orders"]);
    }
}
