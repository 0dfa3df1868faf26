//! Order creation flow.
//!
//! Wires the catalog to the collaborator ports: resolve the box, obtain a
//! payment reference from the (mocked) provider, persist the order document,
//! and dispatch the confirmation email without blocking the response.

use axum::{extract::State, http::StatusCode, Json};
use bloombox_core::PaymentReference;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::routes::{domain_failure, ApiError, ApiFailure, ApiState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub box_slug: String,
    /// Defaults to a single box
    pub quantity: Option<u32>,
    pub customer_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub payment_reference: PaymentReference,
    pub amount: u32,
    pub status: &'static str,
}

pub async fn create_order(
    State(state): State<ApiState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiFailure> {
    let quantity = request.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError { error: "quantity must be at least 1".to_owned() }),
        ));
    }
    if request.customer_name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError { error: "customerName must not be empty".to_owned() }),
        ));
    }

    let gift_box = state.catalog.find_by_slug(&request.box_slug).map_err(domain_failure)?;
    let amount = gift_box.price.saturating_mul(quantity);
    let payment_reference = state.payments.create_reference(amount);

    let document = json!({
        "boxSlug": gift_box.slug.clone(),
        "boxName": gift_box.name.clone(),
        "quantity": quantity,
        "amount": amount,
        "customerName": request.customer_name,
        "email": request.email.clone(),
        "paymentReference": payment_reference.0.clone(),
        "createdAt": Utc::now().to_rfc3339(),
    });

    let order_id = state
        .documents
        .create_document("orders", document)
        .await
        .map_err(|error| match error {
            bloombox_core::ApplicationError::Domain(domain) => domain_failure(domain),
            other => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError { error: other.to_string() }),
            ),
        })?;

    info!(
        event_name = "api.orders.created",
        order_id = %order_id,
        box_slug = %gift_box.slug,
        amount,
        "order persisted"
    );

    // Confirmation dispatch is fire-and-forget; a mail failure never fails
    // the order.
    if let Some(email) = request.email.clone() {
        let mailer = state.mailer.clone();
        let box_name = gift_box.name.clone();
        tokio::spawn(async move {
            let body = format!("Your {box_name} is on its way!");
            if let Err(error) = mailer.send_confirmation(&email, "Your BloomBox order", &body).await
            {
                warn!(
                    event_name = "api.orders.confirmation_failed",
                    error = %error,
                    "order confirmation email was not dispatched"
                );
            }
        });
    }

    Ok(Json(OrderResponse {
        order_id: order_id.to_string(),
        payment_reference,
        amount,
        status: "confirmed",
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::Json;
    use bloombox_core::{
        Catalog, InMemoryDocumentStore, MockPaymentGateway, NoopMailer, RecommendationEngine,
    };

    use super::{create_order, CreateOrderRequest};
    use crate::routes::ApiState;

    fn state_with_store() -> (ApiState, Arc<InMemoryDocumentStore>) {
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = ApiState {
            catalog: Arc::new(Catalog::new()),
            recommender: RecommendationEngine::new(),
            documents: store.clone(),
            payments: Arc::new(MockPaymentGateway),
            mailer: Arc::new(NoopMailer),
        };
        (state, store)
    }

    #[tokio::test]
    async fn order_persists_one_document_and_returns_payment_reference() {
        let (state, store) = state_with_store();

        let response = create_order(
            State(state),
            Json(CreateOrderRequest {
                box_slug: "joy-box".to_string(),
                quantity: Some(2),
                customer_name: "Mia".to_string(),
                email: None,
            }),
        )
        .await
        .expect("order should succeed");

        assert_eq!(response.0.amount, 3798);
        assert_eq!(response.0.status, "confirmed");
        assert!(response.0.payment_reference.0.starts_with("pay_"));
        assert_eq!(store.document_count("orders"), 1);
    }

    #[tokio::test]
    async fn order_for_unknown_slug_returns_not_found() {
        let (state, store) = state_with_store();

        let result = create_order(
            State(state),
            Json(CreateOrderRequest {
                box_slug: "ghost-box".to_string(),
                quantity: None,
                customer_name: "Mia".to_string(),
                email: None,
            }),
        )
        .await;

        let (status, _) = result.expect_err("unknown slug should fail");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.document_count("orders"), 0);
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected() {
        let (state, _) = state_with_store();

        let result = create_order(
            State(state),
            Json(CreateOrderRequest {
                box_slug: "joy-box".to_string(),
                quantity: Some(0),
                customer_name: "Mia".to_string(),
                email: None,
            }),
        )
        .await;

        let (status, _) = result.expect_err("zero quantity should fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
