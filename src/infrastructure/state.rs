//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{EmailRepository, FranchiseRepository};
use crate::infrastructure::{SeaOrmEmailRepository, SeaOrmFranchiseRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Email record repository
    pub email_repo: Arc<dyn EmailRepository>,
    /// Franchise request repository
    pub franchise_repo: Arc<dyn FranchiseRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            email_repo: Arc::new(SeaOrmEmailRepository::new(db.clone())),
            franchise_repo: Arc::new(SeaOrmFranchiseRepository::new(db)),
        }
    }
}
