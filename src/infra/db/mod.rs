//! Database access for the directory schema.
//!
//! Wraps the SeaORM connection plus the migration entry points that the
//! CLI subcommands drive.

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Handle on the directory database.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and bring the directory schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect_unmigrated(config).await?;
        Migrator::up(&db.connection, None).await?;
        tracing::info!("Directory schema is up to date");
        Ok(db)
    }

    /// Connect without touching the schema. The migrate subcommands manage
    /// the schema themselves.
    pub async fn connect_unmigrated(config: &Config) -> Result<Self, DbErr> {
        let connection = sea_orm::Database::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Clone out the underlying connection for repository wiring.
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration.
    pub async fn migrate_up(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn migrate_down(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop the directory tables and re-run every migration.
    pub async fn migrate_fresh(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Per-migration status in definition order, as (name, status) pairs.
    pub async fn migration_status(&self) -> Result<Vec<(String, String)>, DbErr> {
        let migrations = Migrator::get_migration_with_status(&self.connection).await?;

        Ok(migrations
            .into_iter()
            .map(|m| (m.name().to_string(), m.status().to_string()))
            .collect())
    }

    /// Liveness check backing the health endpoint.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
