//! Database Layer
//!
//! Embedded SurrealDB behind a thin service wrapper plus per-table
//! repositories. All record ids follow the "table:key" string convention.

pub mod models;
pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Database service holding the embedded connection
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `path`
    pub async fn new(path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::setup(db).await
    }

    /// Open an in-memory database, used by tests
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::setup(db).await
    }

    async fn setup(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns("kams")
            .use_db("pos")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        // Indexes backing the hot store-scoped lookups
        db.query(
            r#"
            DEFINE INDEX IF NOT EXISTS employee_store ON TABLE employee COLUMNS store;
            DEFINE INDEX IF NOT EXISTS category_store ON TABLE category COLUMNS store;
            DEFINE INDEX IF NOT EXISTS menu_item_store ON TABLE menu_item COLUMNS store;
            DEFINE INDEX IF NOT EXISTS modifier_group_store ON TABLE modifier_group COLUMNS store;
            DEFINE INDEX IF NOT EXISTS modifier_store ON TABLE modifier COLUMNS store;
            DEFINE INDEX IF NOT EXISTS customer_store ON TABLE customer COLUMNS store;
            DEFINE INDEX IF NOT EXISTS order_store_status ON TABLE `order` COLUMNS store, status;
            DEFINE INDEX IF NOT EXISTS store_profile_store ON TABLE store_profile COLUMNS store UNIQUE;
            "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;

        Ok(Self { db })
    }
}
