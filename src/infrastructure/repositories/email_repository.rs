//! SeaORM implementation of EmailRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::{DomainError, EmailRepository};
use crate::models::email_record::{self, Entity as EmailEntity};

/// SeaORM-based implementation of EmailRepository
pub struct SeaOrmEmailRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmailRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmailRepository for SeaOrmEmailRepository {
    async fn list(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<email_record::Model>, DomainError> {
        let records = EmailEntity::find()
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(records)
    }

    async fn create(&self, email: String) -> Result<email_record::Model, DomainError> {
        let record = email_record::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            date: Set(chrono::Utc::now()),
        };

        Ok(record.insert(&self.db).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<email_record::Model, DomainError> {
        EmailEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, id: Uuid, email: String) -> Result<email_record::Model, DomainError> {
        let existing = self.find_by_id(id).await?;

        let mut record: email_record::ActiveModel = existing.into();
        record.email = Set(email);
        record.date = Set(chrono::Utc::now());

        Ok(record.update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<email_record::Model, DomainError> {
        let existing = self.find_by_id(id).await?;

        let snapshot = existing.clone();
        existing.delete(&self.db).await?;

        Ok(snapshot)
    }
}
