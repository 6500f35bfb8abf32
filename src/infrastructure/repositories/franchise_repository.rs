//! SeaORM implementation of FranchiseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::{CreateFranchiseInput, DomainError, FranchiseRepository, UpdateFranchiseInput};
use crate::models::franchise_request::{self, Entity as FranchiseEntity};

/// SeaORM-based implementation of FranchiseRepository
pub struct SeaOrmFranchiseRepository {
    db: DatabaseConnection,
}

impl SeaOrmFranchiseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FranchiseRepository for SeaOrmFranchiseRepository {
    async fn list(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<franchise_request::Model>, DomainError> {
        let requests = FranchiseEntity::find()
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(requests)
    }

    async fn create(
        &self,
        input: CreateFranchiseInput,
    ) -> Result<franchise_request::Model, DomainError> {
        let request = franchise_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(input.full_name),
            phone: Set(input.phone),
            email: Set(input.email),
            ownership_type: Set(input.ownership_type),
            planned_investments: Set(input.planned_investments),
            premises_type: Set(input.premises_type),
            franchise_source: Set(input.franchise_source),
            date_submitted: Set(chrono::Utc::now()),
        };

        Ok(request.insert(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<franchise_request::Model, DomainError> {
        FranchiseEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)
    }

    async fn update(
        &self,
        id: Uuid,
        input: UpdateFranchiseInput,
    ) -> Result<franchise_request::Model, DomainError> {
        let txn = self.db.begin().await?;

        let existing = FranchiseEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut request: franchise_request::ActiveModel = existing.into();
        let mut changed = false;

        if let Some(full_name) = input.full_name {
            request.full_name = Set(full_name);
            changed = true;
        }
        if let Some(phone) = input.phone {
            request.phone = Set(phone);
            changed = true;
        }
        if let Some(email) = input.email {
            request.email = Set(email);
            changed = true;
        }
        if let Some(ownership_type) = input.ownership_type {
            request.ownership_type = Set(ownership_type);
            changed = true;
        }
        if let Some(planned_investments) = input.planned_investments {
            request.planned_investments = Set(planned_investments);
            changed = true;
        }
        if let Some(premises_type) = input.premises_type {
            request.premises_type = Set(premises_type);
            changed = true;
        }
        if let Some(franchise_source) = input.franchise_source {
            request.franchise_source = Set(franchise_source);
            changed = true;
        }

        if changed {
            request.update(&txn).await?;
        }

        txn.commit().await?;

        // Re-read after commit so the caller sees persisted state,
        // not just the in-memory mutation
        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<franchise_request::Model, DomainError> {
        let existing = self.find_by_id(id).await?;

        let snapshot = existing.clone();
        existing.delete(&self.db).await?;

        Ok(snapshot)
    }
}
