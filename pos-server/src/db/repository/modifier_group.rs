//! Modifier Group Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ModifierGroup, ModifierGroupCreate, ModifierGroupUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct ModifierGroupRepository {
    base: BaseRepository,
}

impl ModifierGroupRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(
        &self,
        store: &str,
        include_inactive: bool,
    ) -> RepoResult<Vec<ModifierGroup>> {
        let query = if include_inactive {
            "SELECT * FROM modifier_group WHERE store = $store ORDER BY name"
        } else {
            "SELECT * FROM modifier_group WHERE store = $store AND is_active = true ORDER BY name"
        };
        let groups: Vec<ModifierGroup> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .await?
            .take(0)?;
        Ok(groups)
    }

    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<ModifierGroup>> {
        let thing = BaseRepository::parse_id("modifier_group", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let groups: Vec<ModifierGroup> = result.take(0)?;
        Ok(groups.into_iter().next())
    }

    pub async fn create(&self, store: &str, data: ModifierGroupCreate) -> RepoResult<ModifierGroup> {
        if data.max_select > 0 && data.min_select > data.max_select {
            return Err(RepoError::Validation(
                "min_select cannot exceed max_select".to_string(),
            ));
        }
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE modifier_group SET
                    store = $store,
                    name = $name,
                    min_select = $min_select,
                    max_select = $max_select,
                    is_active = true
                RETURN AFTER"#,
            )
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("min_select", data.min_select))
            .bind(("max_select", data.max_select))
            .await?;
        let created: Option<ModifierGroup> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create modifier group".to_string()))
    }

    pub async fn update(
        &self,
        store: &str,
        id: &str,
        data: ModifierGroupUpdate,
    ) -> RepoResult<ModifierGroup> {
        let thing = BaseRepository::parse_id("modifier_group", id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    min_select = IF $has_min THEN $min_select ELSE min_select END,
                    max_select = IF $has_max THEN $max_select ELSE max_select END,
                    is_active = IF $has_active THEN $is_active ELSE is_active END
                WHERE store = $store
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("has_min", data.min_select.is_some()))
            .bind(("min_select", data.min_select))
            .bind(("has_max", data.max_select.is_some()))
            .bind(("max_select", data.max_select))
            .bind(("has_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .await?;
        let updated: Option<ModifierGroup> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Modifier group {} not found", id)))
    }

    pub async fn deactivate(&self, store: &str, id: &str) -> RepoResult<ModifierGroup> {
        let thing = BaseRepository::parse_id("modifier_group", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false WHERE store = $store RETURN AFTER")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let updated: Option<ModifierGroup> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Modifier group {} not found", id)))
    }
}
