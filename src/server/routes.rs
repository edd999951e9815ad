//! HTTP routes for the menu item collection.
//!
//! - `GET    /health`
//! - `GET    /api/entities`       list (200)
//! - `POST   /api/entities`       create (201, 400 on invalid input)
//! - `GET    /api/entities/{id}`  fetch one (200, 404)
//! - `PUT    /api/entities/{id}`  update (200, 400, 404)
//! - `DELETE /api/entities/{id}`  delete (204, 404)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use menucat_core::{MenuItem, MenuItemDraft};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::repository::MenuItemRepository;
use super::service::{MenuItemService, ServiceError};

/// Path of the collection resource.
pub const COLLECTION_PATH: &str = "/api/entities";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    service: MenuItemService,
}

impl AppState {
    pub fn new(repo: Arc<MenuItemRepository>) -> Self {
        Self {
            service: MenuItemService::new(repo),
        }
    }
}

/// Builds the catalog router with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(COLLECTION_PATH, get(list_items).post(create_item))
        .route(
            "/api/entities/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Error response body
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self.0 {
            ServiceError::InvalidPrice(_) => (StatusCode::BAD_REQUEST, "invalid_price"),
            ServiceError::EmptyName => (StatusCode::BAD_REQUEST, "invalid_name"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };
        (
            status,
            Json(ErrorBody {
                error,
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.service.get_all().await?))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MenuItem>, ApiError> {
    Ok(Json(state.service.get(id).await?))
}

async fn create_item(
    State(state): State<AppState>,
    Json(draft): Json<MenuItemDraft>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let created = state.service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<MenuItemDraft>,
) -> Result<Json<MenuItem>, ApiError> {
    Ok(Json(state.service.update(id, draft).await?))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
