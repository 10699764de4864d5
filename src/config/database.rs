//! Database configuration module.
//!
//! Handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without manual SQL. A column the entities do
//! not declare simply does not exist, which is what rejects unknown fields
//! at the store boundary.

use crate::config::AppConfig;
use crate::entities::{Lead, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Resolves the database URL: `DATABASE_URL` environment variable first,
/// then the configured value, then a default local `SQLite` file.
#[must_use]
pub fn get_database_url(config: &AppConfig) -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        config
            .database_url
            .clone()
            .unwrap_or_else(|| "sqlite://data/leadtrack.sqlite".to_string())
    })
}

/// Establishes a connection to the database resolved by [`get_database_url`].
pub async fn create_connection(config: &AppConfig) -> Result<DatabaseConnection> {
    let database_url = get_database_url(config);
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `leads` and `users` tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut lead_table = schema.create_table_from_entity(Lead);
    let mut user_table = schema.create_table_from_entity(User);

    // Re-running the bootstrap against an existing database is a no-op
    db.execute(builder.build(lead_table.if_not_exists())).await?;
    db.execute(builder.build(user_table.if_not_exists())).await?;

    Ok(())
}
