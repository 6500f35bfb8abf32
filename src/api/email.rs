use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::Pagination;
use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailPayload {
    pub email: String,
}

// List email records with pagination
pub async fn list_emails(
    State(state): State<AppState>,
    Query(params): Query<Pagination>,
) -> impl IntoResponse {
    match state.email_repo.list(params.skip, params.limit).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list emails: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Create email record
pub async fn create_email(
    State(state): State<AppState>,
    Json(payload): Json<EmailPayload>,
) -> impl IntoResponse {
    match state.email_repo.create(payload.email).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => {
            tracing::error!("Failed to create email: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Get single email record
pub async fn get_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.email_repo.find_by_id(id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Email not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch email {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Update email record (replaces the address and refreshes the timestamp)
pub async fn update_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EmailPayload>,
) -> impl IntoResponse {
    match state.email_repo.update(id, payload.email).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Email not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update email {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// Delete email record, returning the removed row
pub async fn delete_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.email_repo.delete(id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Email not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete email {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
