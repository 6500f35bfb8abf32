pub mod email;
pub mod franchise;
pub mod health;

use axum::{
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::infrastructure::AppState;

/// Common pagination query parameters, `?skip=0&limit=10`
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Email subscription records
        .route(
            "/email",
            get(email::list_emails).post(email::create_email),
        )
        .route(
            "/email/:id",
            get(email::get_email)
                .put(email::update_email)
                .delete(email::delete_email),
        )
        // Franchise application requests
        .route(
            "/franchise",
            get(franchise::list_requests).post(franchise::create_request),
        )
        .route(
            "/franchise/:id",
            get(franchise::get_request)
                .put(franchise::update_request)
                .delete(franchise::delete_request),
        )
        .with_state(state)
}
