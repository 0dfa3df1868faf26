//! Public JSON API routes.
//!
//! Endpoints:
//! - `GET  /`                                        — service banner
//! - `GET  /api/hello`                               — connectivity probe
//! - `GET  /api/featured-boxes`                      — full featured catalog
//! - `GET  /api/categories`                          — fixed facet enumerations
//! - `GET  /api/categories/{facet_type}/{facet_key}` — facet-filtered catalog
//! - `GET  /api/boxes/{slug}`                        — enriched box detail
//! - `POST /api/recommend-gifts`                     — rule-based recommendations
//! - `POST /api/generate-message`                    — templated greeting
//! - `POST /api/orders`                              — order creation flow

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use bloombox_core::config::CorsConfig;
use bloombox_core::{
    query_by_facet, ApplicationError, Catalog, Categories, ComposedMessage, DocumentStore,
    DomainError, GiftBox, GiftBoxDetail, InterfaceError, Mailer, MessageIntent, PaymentGateway,
    Recommendation, RecommendationEngine, RecommendationIntent,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;
use uuid::Uuid;

use crate::orders;

#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    pub recommender: RecommendationEngine,
    pub documents: Arc<dyn DocumentStore>,
    pub payments: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ServiceMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BoxesResponse {
    pub boxes: Vec<GiftBox>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub type ApiFailure = (StatusCode, Json<ApiError>);

/// Map a domain failure to its HTTP shape, tagging it with a correlation id.
pub fn domain_failure(error: DomainError) -> ApiFailure {
    let correlation_id = Uuid::new_v4().to_string();
    let interface = ApplicationError::from(error).into_interface(correlation_id);
    let status = match &interface {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiError { error: interface.user_message().to_owned() }))
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(service_root))
        .route("/api/hello", get(hello))
        .route("/api/featured-boxes", get(featured_boxes))
        .route("/api/categories", get(categories))
        .route("/api/categories/{facet_type}/{facet_key}", get(boxes_by_facet))
        .route("/api/boxes/{slug}", get(box_detail))
        .route("/api/recommend-gifts", post(recommend_gifts))
        .route("/api/generate-message", post(generate_message))
        .route("/api/orders", post(orders::create_order))
        .with_state(state)
}

/// Permissive by default (`*`); otherwise restricted to the configured origins.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn service_root() -> Json<ServiceMessage> {
    Json(ServiceMessage { message: "BloomBox API is running" })
}

async fn hello() -> Json<ServiceMessage> {
    Json(ServiceMessage { message: "Hello from BloomBox backend!" })
}

async fn featured_boxes(State(state): State<ApiState>) -> Json<BoxesResponse> {
    Json(BoxesResponse { boxes: state.catalog.list_all().to_vec() })
}

async fn categories(State(state): State<ApiState>) -> Json<Categories> {
    Json(state.catalog.categories())
}

async fn boxes_by_facet(
    Path((facet_type, facet_key)): Path<(String, String)>,
    State(state): State<ApiState>,
) -> Result<Json<BoxesResponse>, ApiFailure> {
    let matches =
        query_by_facet(&state.catalog, &facet_type, &facet_key).map_err(domain_failure)?;

    Ok(Json(BoxesResponse { boxes: matches.into_iter().cloned().collect() }))
}

async fn box_detail(
    Path(slug): Path<String>,
    State(state): State<ApiState>,
) -> Result<Json<GiftBoxDetail>, ApiFailure> {
    let detail = state.catalog.detail(&slug).map_err(domain_failure)?;
    Ok(Json(detail))
}

async fn recommend_gifts(
    State(state): State<ApiState>,
    Json(intent): Json<RecommendationIntent>,
) -> Json<Recommendation> {
    let outcome = state.recommender.recommend(&intent);
    info!(
        event_name = "api.recommend.served",
        context = %outcome.context,
        result_count = outcome.results.len(),
        "recommendation served"
    );
    Json(outcome)
}

async fn generate_message(Json(intent): Json<MessageIntent>) -> Json<ComposedMessage> {
    Json(bloombox_core::compose(&intent))
}
