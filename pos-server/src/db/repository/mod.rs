//! Repository Module
//!
//! Store-scoped CRUD over the SurrealDB tables. Every query binds the
//! caller's store id; no repository method can cross tenants.

pub mod category;
pub mod customer;
pub mod employee;
pub mod menu_item;
pub mod modifier;
pub mod modifier_group;
pub mod order;
pub mod store_profile;

pub use category::CategoryRepository;
pub use customer::CustomerRepository;
pub use employee::EmployeeRepository;
pub use menu_item::MenuItemRepository;
pub use modifier::ModifierRepository;
pub use modifier_group::ModifierGroupRepository;
pub use order::OrderRepository;
pub use store_profile::StoreProfileRepository;

use shared::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot remove the last active admin")]
    LastAdmin,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::already_exists(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::LastAdmin => AppError::new(ErrorCode::CannotRemoveLastAdmin),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings everywhere above the repository layer
// =============================================================================
//
// surrealdb::RecordId handles all ids:
//   - parse: let id: RecordId = "menu_item:abc".parse()?;
//   - build: let id = RecordId::from_table_key("menu_item", "abc");
//   - CRUD: db.select(id) / db.delete(id) take RecordId directly
//
// Record-ref FIELDS (category, employee, ...) are stored as "table:id"
// strings through the serde helpers, so query binds against those fields
// must bind `id.to_string()`, never the native RecordId.

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Parse a "table:id" (or bare key) string into a RecordId for `table`
    pub fn parse_id(table: &str, id: &str) -> RepoResult<surrealdb::RecordId> {
        let key = match id.split_once(':') {
            Some((t, k)) if t == table => k,
            Some(_) => return Err(RepoError::Validation(format!("Invalid ID: {}", id))),
            None => id,
        };
        if key.is_empty() {
            return Err(RepoError::Validation(format!("Invalid ID: {}", id)));
        }
        Ok(surrealdb::RecordId::from_table_key(table, key))
    }
}
