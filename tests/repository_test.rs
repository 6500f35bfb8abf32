use std::time::Duration;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use leadbox::db;
use leadbox::domain::{
    CreateFranchiseInput, DomainError, EmailRepository, FranchiseRepository,
    UpdateFranchiseInput,
};
use leadbox::infrastructure::{SeaOrmEmailRepository, SeaOrmFranchiseRepository};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn franchise_input() -> CreateFranchiseInput {
    CreateFranchiseInput {
        full_name: "Ivan Petrov".to_string(),
        phone: "+7 900 000-00-00".to_string(),
        email: "ivan@example.com".to_string(),
        ownership_type: "LLC".to_string(),
        planned_investments: "1-2M".to_string(),
        premises_type: "rented".to_string(),
        franchise_source: "web".to_string(),
    }
}

#[tokio::test]
async fn test_email_update_replaces_address_and_refreshes_timestamp() {
    let repo = SeaOrmEmailRepository::new(setup_test_db().await);

    let created = repo
        .create("a@b.com".to_string())
        .await
        .expect("Failed to create record");

    tokio::time::sleep(Duration::from_millis(10)).await;

    let updated = repo
        .update(created.id, "c@d.com".to_string())
        .await
        .expect("Failed to update record");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "c@d.com");
    assert!(updated.date > created.date);
}

#[tokio::test]
async fn test_email_repo_not_found_for_unknown_id() {
    let repo = SeaOrmEmailRepository::new(setup_test_db().await);
    let unknown = Uuid::new_v4();

    assert!(matches!(
        repo.find_by_id(unknown).await,
        Err(DomainError::NotFound)
    ));
    assert!(matches!(
        repo.update(unknown, "x@y.com".to_string()).await,
        Err(DomainError::NotFound)
    ));
    assert!(matches!(
        repo.delete(unknown).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_email_delete_returns_snapshot_and_removes_row() {
    let repo = SeaOrmEmailRepository::new(setup_test_db().await);

    let created = repo
        .create("a@b.com".to_string())
        .await
        .expect("Failed to create record");

    let snapshot = repo.delete(created.id).await.expect("Failed to delete");
    assert_eq!(snapshot, created);

    assert!(matches!(
        repo.find_by_id(created.id).await,
        Err(DomainError::NotFound)
    ));
    let remaining = repo.list(0, 10).await.expect("Failed to list");
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_franchise_partial_update_keeps_unsupplied_fields() {
    let repo = SeaOrmFranchiseRepository::new(setup_test_db().await);

    let created = repo
        .create(franchise_input())
        .await
        .expect("Failed to create request");

    let updated = repo
        .update(
            created.id,
            UpdateFranchiseInput {
                phone: Some("555".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update request");

    assert_eq!(updated.phone, "555");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.full_name, created.full_name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.ownership_type, created.ownership_type);
    assert_eq!(updated.planned_investments, created.planned_investments);
    assert_eq!(updated.premises_type, created.premises_type);
    assert_eq!(updated.franchise_source, created.franchise_source);
    assert_eq!(updated.date_submitted, created.date_submitted);
}

#[tokio::test]
async fn test_franchise_empty_patch_is_a_no_op() {
    let repo = SeaOrmFranchiseRepository::new(setup_test_db().await);

    let created = repo
        .create(franchise_input())
        .await
        .expect("Failed to create request");

    let updated = repo
        .update(created.id, UpdateFranchiseInput::default())
        .await
        .expect("Failed to apply empty patch");

    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_list_pagination_past_the_end_is_empty() {
    let repo = SeaOrmFranchiseRepository::new(setup_test_db().await);

    repo.create(franchise_input())
        .await
        .expect("Failed to create request");

    let page = repo.list(5, 10).await.expect("Failed to list");
    assert!(page.is_empty());
}
