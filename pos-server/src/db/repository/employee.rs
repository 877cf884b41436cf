//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate, Role};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find employees of a store, active only unless `include_inactive`
    pub async fn find_all(&self, store: &str, include_inactive: bool) -> RepoResult<Vec<Employee>> {
        let query = if include_inactive {
            "SELECT * FROM employee WHERE store = $store ORDER BY name"
        } else {
            "SELECT * FROM employee WHERE store = $store AND is_active = true ORDER BY name"
        };
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find an employee of a store by id (active or not)
    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<Employee>> {
        let thing = BaseRepository::parse_id("employee", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Resolve a till login target: active employee of the given store
    ///
    /// Accepts "employee:key" or a bare key. Anything that does not resolve
    /// (bad id, other store, inactive, missing) is `None`, never an error,
    /// so callers can answer uniformly.
    pub async fn find_login_target(&self, store: &str, id: &str) -> RepoResult<Option<Employee>> {
        let Ok(thing) = BaseRepository::parse_id("employee", id) else {
            return Ok(None);
        };
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store AND is_active = true")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee with a hashed PIN
    pub async fn create(&self, store: &str, data: EmployeeCreate) -> RepoResult<Employee> {
        let pin_hash = Employee::hash_pin(&data.pin)
            .map_err(|e| RepoError::Database(format!("Failed to hash PIN: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    store = $store,
                    name = $name,
                    role = $role,
                    pin_hash = $pin_hash,
                    is_active = true,
                    email = $email,
                    metadata = $metadata
                RETURN AFTER"#,
            )
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("role", data.role))
            .bind(("pin_hash", pin_hash))
            .bind(("email", data.email))
            .bind(("metadata", data.metadata))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    ///
    /// A demotion away from ADMIN runs as a single conditional UPDATE whose
    /// WHERE clause re-counts other active admins of the store at write
    /// time, so two concurrent demotions cannot both slip through.
    pub async fn update(
        &self,
        store: &str,
        id: &str,
        data: EmployeeUpdate,
    ) -> RepoResult<Employee> {
        let thing = BaseRepository::parse_id("employee", id)?;
        let existing = self
            .find_by_id(store, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        let pin_hash = match &data.pin {
            Some(pin) => Some(
                Employee::hash_pin(pin)
                    .map_err(|e| RepoError::Database(format!("Failed to hash PIN: {}", e)))?,
            ),
            None => None,
        };

        let demoting_admin =
            existing.role == Role::Admin && matches!(data.role, Some(r) if r != Role::Admin);

        let guard = if demoting_admin {
            r#"WHERE array::len((
                SELECT id FROM employee
                WHERE store = $store AND role = 'ADMIN' AND is_active = true AND id != $thing
            )) > 0"#
        } else {
            ""
        };

        let query = format!(
            r#"UPDATE $thing SET
                name = $name OR name,
                role = IF $has_role THEN $role ELSE role END,
                pin_hash = $pin_hash OR pin_hash,
                email = $email OR email,
                metadata = IF $has_metadata THEN $metadata ELSE metadata END
            {guard}
            RETURN AFTER"#
        );

        let mut result = self
            .base
            .db()
            .query(query)
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("has_role", data.role.is_some()))
            .bind(("role", data.role))
            .bind(("pin_hash", pin_hash))
            .bind(("email", data.email))
            .bind(("has_metadata", data.metadata.is_some()))
            .bind(("metadata", data.metadata))
            .await?;

        let updated: Option<Employee> = result.take(0)?;
        match updated {
            Some(employee) => Ok(employee),
            // The record exists, so an empty result means the guard failed
            None if demoting_admin => Err(RepoError::LastAdmin),
            None => Err(RepoError::NotFound(format!("Employee {} not found", id))),
        }
    }

    /// Soft-delete an employee
    pub async fn deactivate(&self, store: &str, id: &str) -> RepoResult<Employee> {
        let thing = BaseRepository::parse_id("employee", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false WHERE store = $store RETURN AFTER")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let updated: Option<Employee> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::Role;

    async fn repo() -> EmployeeRepository {
        let service = DbService::memory().await.unwrap();
        EmployeeRepository::new(service.db)
    }

    async fn count_active_admins(repo: &EmployeeRepository, store: &str) -> usize {
        repo.find_all(store, false)
            .await
            .unwrap()
            .into_iter()
            .filter(|e| e.role == Role::Admin)
            .count()
    }

    fn create_payload(name: &str, role: Role) -> EmployeeCreate {
        EmployeeCreate {
            name: name.to_string(),
            role,
            pin: "1234".to_string(),
            email: None,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_scoped_by_store() {
        let repo = repo().await;
        let created = repo
            .create("store_a", create_payload("Alice", Role::Admin))
            .await
            .unwrap();
        let id = created.id_string();

        assert!(repo.find_by_id("store_a", &id).await.unwrap().is_some());
        assert!(repo.find_by_id("store_b", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_target_excludes_inactive() {
        let repo = repo().await;
        let created = repo
            .create("store_a", create_payload("Alice", Role::Cashier))
            .await
            .unwrap();
        let id = created.id_string();

        assert!(repo.find_login_target("store_a", &id).await.unwrap().is_some());
        repo.deactivate("store_a", &id).await.unwrap();
        assert!(repo.find_login_target("store_a", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_target_tolerates_garbage_id() {
        let repo = repo().await;
        assert!(repo
            .find_login_target("store_a", "order:nope")
            .await
            .unwrap()
            .is_none());
        assert!(repo.find_login_target("store_a", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sole_admin_cannot_be_demoted() {
        let repo = repo().await;
        let admin = repo
            .create("store_a", create_payload("Alice", Role::Admin))
            .await
            .unwrap();

        let update = EmployeeUpdate {
            name: None,
            role: Some(Role::Cashier),
            pin: None,
            email: None,
            metadata: None,
        };
        let err = repo
            .update("store_a", &admin.id_string(), update)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::LastAdmin));
        assert_eq!(count_active_admins(&repo, "store_a").await, 1);
    }

    #[tokio::test]
    async fn test_demotion_succeeds_with_second_admin() {
        let repo = repo().await;
        let alice = repo
            .create("store_a", create_payload("Alice", Role::Admin))
            .await
            .unwrap();
        repo.create("store_a", create_payload("Bob", Role::Admin))
            .await
            .unwrap();

        let update = EmployeeUpdate {
            name: None,
            role: Some(Role::Cashier),
            pin: None,
            email: None,
            metadata: None,
        };
        let updated = repo
            .update("store_a", &alice.id_string(), update)
            .await
            .unwrap();
        assert_eq!(updated.role, Role::Cashier);
        assert_eq!(count_active_admins(&repo, "store_a").await, 1);
    }

    #[tokio::test]
    async fn test_admin_in_other_store_does_not_satisfy_guard() {
        let repo = repo().await;
        let alice = repo
            .create("store_a", create_payload("Alice", Role::Admin))
            .await
            .unwrap();
        repo.create("store_b", create_payload("Bea", Role::Admin))
            .await
            .unwrap();

        let update = EmployeeUpdate {
            name: None,
            role: Some(Role::Cashier),
            pin: None,
            email: None,
            metadata: None,
        };
        let err = repo
            .update("store_a", &alice.id_string(), update)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::LastAdmin));
    }

    #[tokio::test]
    async fn test_update_pin_changes_hash() {
        let repo = repo().await;
        let created = repo
            .create("store_a", create_payload("Alice", Role::Cashier))
            .await
            .unwrap();
        assert!(created.verify_pin("1234").unwrap());

        let update = EmployeeUpdate {
            name: None,
            role: None,
            pin: Some("9999".to_string()),
            email: None,
            metadata: None,
        };
        let updated = repo
            .update("store_a", &created.id_string(), update)
            .await
            .unwrap();
        assert!(updated.verify_pin("9999").unwrap());
        assert!(!updated.verify_pin("1234").unwrap());
    }
}
