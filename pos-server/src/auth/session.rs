//! Session resolution
//!
//! [`AuthSession`] is the resolved authentication context attached to each
//! request. Resolution is lazy about failures: a missing or invalid tier
//! yields `None`, and enforcement happens in the extractors, not here.

use crate::auth::identity::{IdentityProvider, StoreId};
use crate::db::models::Employee;
use crate::db::repository::EmployeeRepository;
use shared::AppResult;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Resolved authentication context for a request
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    /// Store account the request belongs to (outer tier)
    pub store_id: Option<StoreId>,
    /// Till operator, present only when the employee cookie resolved to an
    /// active employee of the same store (inner tier)
    pub operator: Option<Employee>,
}

impl AuthSession {
    /// Both tiers present
    pub fn is_fully_authenticated(&self) -> bool {
        self.store_id.is_some() && self.operator.is_some()
    }

    /// Resolve the session from the raw cookie values
    ///
    /// The operator tier is only attempted once the store tier resolved:
    /// an employee id without a store session is meaningless. A cookie that
    /// points at a missing, inactive or foreign-store employee resolves to
    /// no operator rather than an error.
    pub async fn resolve(
        db: &Surreal<Db>,
        identity: &dyn IdentityProvider,
        store_token: Option<&str>,
        employee_id: Option<&str>,
    ) -> AppResult<Self> {
        let store_id = match store_token {
            Some(token) => identity.verify_session(token).await?,
            None => None,
        };

        let Some(store_id) = store_id else {
            return Ok(Self::default());
        };

        let operator = match employee_id {
            Some(id) if !id.is_empty() => {
                let repo = EmployeeRepository::new(db.clone());
                repo.find_login_target(&store_id, id).await?
            }
            _ => None,
        };

        Ok(Self {
            store_id: Some(store_id),
            operator,
        })
    }
}
