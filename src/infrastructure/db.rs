use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Create emails table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS emails (
            id BLOB NOT NULL PRIMARY KEY,
            email TEXT NOT NULL,
            date TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create franchise_requests table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS franchise_requests (
            id BLOB NOT NULL PRIMARY KEY,
            full_name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            ownership_type TEXT NOT NULL,
            planned_investments TEXT NOT NULL,
            premises_type TEXT NOT NULL,
            franchise_source TEXT NOT NULL,
            date_submitted TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    Ok(())
}
