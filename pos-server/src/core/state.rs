//! Server state
//!
//! [`ServerState`] holds shared references to every service a request handler
//! needs. Cloning is shallow (Arc / connection handles), so the state is
//! cheap to pass into the axum router.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{HttpIdentityProvider, IdentityProvider, StaticIdentityProvider};
use crate::core::Config;
use crate::db::DbService;
use shared::AppError;

/// Shared server state
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable configuration |
/// | db | Embedded database handle (SurrealDB) |
/// | identity | Store-session verifier (external identity provider client) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl ServerState {
    /// Create server state from pre-built parts (used by tests)
    pub fn new(config: Config, db: Surreal<Db>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            config,
            db,
            identity,
        }
    }

    /// Initialize server state from configuration
    ///
    /// Opens the embedded database under `work_dir/database/pos.db` and
    /// selects the identity provider client. Without `IDENTITY_URL` the
    /// static development provider is used, which accepts the single token
    /// `dev` for store `store_dev`.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = db_dir.join("pos.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let identity: Arc<dyn IdentityProvider> = match &config.identity_url {
            Some(url) => Arc::new(HttpIdentityProvider::new(url.clone())),
            None => {
                tracing::warn!(
                    "IDENTITY_URL not set, using static development identity provider"
                );
                Arc::new(StaticIdentityProvider::new().with_session("dev", "store_dev"))
            }
        };

        Ok(Self::new(config.clone(), db_service.db, identity))
    }

    /// Get the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
