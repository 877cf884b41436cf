//! Customer Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find active customers, optionally filtered by a name/phone substring
    pub async fn find_all(&self, store: &str, search: Option<&str>) -> RepoResult<Vec<Customer>> {
        let mut query =
            String::from("SELECT * FROM customer WHERE store = $store AND is_active = true");
        if search.is_some() {
            query.push_str(
                " AND (string::contains(string::lowercase(name), $search) \
                 OR string::contains(phone OR '', $search))",
            );
        }
        query.push_str(" ORDER BY name");

        let customers: Vec<Customer> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .bind(("search", search.map(|s| s.to_lowercase())))
            .await?
            .take(0)?;
        Ok(customers)
    }

    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<Customer>> {
        let thing = BaseRepository::parse_id("customer", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let customers: Vec<Customer> = result.take(0)?;
        Ok(customers.into_iter().next())
    }

    pub async fn create(&self, store: &str, data: CustomerCreate) -> RepoResult<Customer> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE customer SET
                    store = $store,
                    name = $name,
                    phone = $phone,
                    email = $email,
                    notes = $notes,
                    is_active = true,
                    created_at = $created_at
                RETURN AFTER"#,
            )
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("phone", data.phone))
            .bind(("email", data.email))
            .bind(("notes", data.notes))
            .bind(("created_at", now_millis()))
            .await?;
        let created: Option<Customer> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    pub async fn update(&self, store: &str, id: &str, data: CustomerUpdate) -> RepoResult<Customer> {
        let thing = BaseRepository::parse_id("customer", id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    phone = IF $has_phone THEN $phone ELSE phone END,
                    email = IF $has_email THEN $email ELSE email END,
                    notes = IF $has_notes THEN $notes ELSE notes END,
                    is_active = IF $has_active THEN $is_active ELSE is_active END
                WHERE store = $store
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("has_phone", data.phone.is_some()))
            .bind(("phone", data.phone))
            .bind(("has_email", data.email.is_some()))
            .bind(("email", data.email))
            .bind(("has_notes", data.notes.is_some()))
            .bind(("notes", data.notes))
            .bind(("has_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .await?;
        let updated: Option<Customer> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))
    }

    pub async fn deactivate(&self, store: &str, id: &str) -> RepoResult<Customer> {
        let thing = BaseRepository::parse_id("customer", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false WHERE store = $store RETURN AFTER")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let updated: Option<Customer> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", id)))
    }
}
