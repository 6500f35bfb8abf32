use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;

use super::Pagination;
use crate::domain::{CreateFranchiseInput, DomainError, UpdateFranchiseInput};
use crate::infrastructure::AppState;

// List franchise requests with pagination
pub async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<Pagination>,
) -> impl IntoResponse {
    match state.franchise_repo.list(params.skip, params.limit).await {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list franchise requests: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Create franchise request; every field is required
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateFranchiseInput>,
) -> impl IntoResponse {
    match state.franchise_repo.create(payload).await {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(e) => {
            tracing::error!("Failed to create franchise request: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Get single franchise request
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.franchise_repo.find_by_id(id).await {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Franchise request not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch franchise request {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Partial update: only the supplied fields change, the rest keep their value
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFranchiseInput>,
) -> impl IntoResponse {
    match state.franchise_repo.update(id, payload).await {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Franchise request not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update franchise request {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Delete franchise request, returning the removed row
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.franchise_repo.delete(id).await {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Franchise request not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete franchise request {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
