//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use super::DomainError;
use crate::models::{email_record, franchise_request};

/// Input for creating a franchise request; every field is required
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateFranchiseInput {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub ownership_type: String,
    pub planned_investments: String,
    pub premises_type: String,
    pub franchise_source: String,
}

/// Partial update for a franchise request; absent fields keep their prior value
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateFranchiseInput {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub ownership_type: Option<String>,
    pub planned_investments: Option<String>,
    pub premises_type: Option<String>,
    pub franchise_source: Option<String>,
}

/// Repository trait for email subscription records
#[async_trait]
pub trait EmailRepository: Send + Sync {
    /// Page through records in insertion order; out-of-range skip yields an empty vec
    async fn list(&self, skip: u64, limit: u64)
        -> Result<Vec<email_record::Model>, DomainError>;

    /// Insert a new record with a generated id and the current timestamp
    async fn create(&self, email: String) -> Result<email_record::Model, DomainError>;

    /// Fetch by id, failing with NotFound if absent
    async fn find_by_id(&self, id: Uuid) -> Result<email_record::Model, DomainError>;

    /// Replace the email and refresh the timestamp
    async fn update(&self, id: Uuid, email: String) -> Result<email_record::Model, DomainError>;

    /// Remove the record, returning the pre-deletion snapshot
    async fn delete(&self, id: Uuid) -> Result<email_record::Model, DomainError>;
}

/// Repository trait for franchise application requests
#[async_trait]
pub trait FranchiseRepository: Send + Sync {
    async fn list(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<franchise_request::Model>, DomainError>;

    async fn create(
        &self,
        input: CreateFranchiseInput,
    ) -> Result<franchise_request::Model, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<franchise_request::Model, DomainError>;

    /// Apply only the supplied fields inside one transaction, then re-read
    /// the row so the returned value reflects persisted state
    async fn update(
        &self,
        id: Uuid,
        input: UpdateFranchiseInput,
    ) -> Result<franchise_request::Model, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<franchise_request::Model, DomainError>;
}
