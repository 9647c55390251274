//! PostgreSQL-backed registry store: vehicle registry and operations ledger.

mod error;
pub mod entities;
mod operation_repository;
mod vehicle_repository;

pub use operation_repository::PostgresOperationRepository;
pub use vehicle_repository::SeaOrmVehicleRepository;

use crate::config::DatabaseConfig;
use domain::DomainError;
use error::{map_db_err, map_sqlx_error};
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::{error, info, warn};

/// Handle on the relational store, constructed once at process start and
/// handed to whatever needs a repository.
///
/// Every repository call checks out one pooled connection for a single
/// statement; the guard hands it back on every exit path, errors included.
#[derive(Clone)]
pub struct RegistryStore {
    db: DatabaseConnection,
}

impl RegistryStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(map_sqlx_error)?;

        info!(max_connections = config.max_connections, "Connected to registry store");
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            db: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        }
    }

    /// Create tables and indexes if absent and add columns newer releases expect.
    /// Safe to run on every start.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        Migrator::up(&self.db, None).await.map_err(|e| {
            error!("Schema setup failed: {}", e);
            DomainError::Schema(e.to_string())
        })?;

        info!("Registry schema is up to date");
        Ok(())
    }

    /// Roll back every migration, dropping both tables and all their rows.
    pub async fn reset_schema(&self) -> Result<(), DomainError> {
        Migrator::down(&self.db, None).await.map_err(|e| {
            error!("Schema reset failed: {}", e);
            DomainError::Schema(e.to_string())
        })?;

        warn!("Registry schema dropped");
        Ok(())
    }

    pub fn vehicles(&self) -> SeaOrmVehicleRepository {
        SeaOrmVehicleRepository::new(self.db.clone())
    }

    pub fn operations(&self) -> PostgresOperationRepository {
        PostgresOperationRepository::new(self.db.get_postgres_connection_pool().clone())
    }

    /// Close every pooled connection. Outstanding repositories fail afterwards.
    pub async fn close(self) -> Result<(), DomainError> {
        self.db.close().await.map_err(map_db_err)
    }
}
