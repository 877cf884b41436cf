//! Category Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self, store: &str, include_inactive: bool) -> RepoResult<Vec<Category>> {
        let query = if include_inactive {
            "SELECT * FROM category WHERE store = $store ORDER BY sort_order, name"
        } else {
            "SELECT * FROM category WHERE store = $store AND is_active = true ORDER BY sort_order, name"
        };
        let categories: Vec<Category> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<Category>> {
        let thing = BaseRepository::parse_id("category", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    pub async fn create(&self, store: &str, data: CategoryCreate) -> RepoResult<Category> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE category SET
                    store = $store,
                    name = $name,
                    sort_order = $sort_order,
                    is_active = true
                RETURN AFTER"#,
            )
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("sort_order", data.sort_order))
            .await?;
        let created: Option<Category> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, store: &str, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let thing = BaseRepository::parse_id("category", id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    sort_order = IF $has_sort THEN $sort_order ELSE sort_order END,
                    is_active = IF $has_active THEN $is_active ELSE is_active END
                WHERE store = $store
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("has_sort", data.sort_order.is_some()))
            .bind(("sort_order", data.sort_order))
            .bind(("has_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .await?;
        let updated: Option<Category> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn deactivate(&self, store: &str, id: &str) -> RepoResult<Category> {
        let thing = BaseRepository::parse_id("category", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false WHERE store = $store RETURN AFTER")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let updated: Option<Category> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }
}
