//! Modifier Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Modifier, ModifierCreate, ModifierUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct ModifierRepository {
    base: BaseRepository,
}

impl ModifierRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find modifiers, optionally limited to one group
    pub async fn find_all(
        &self,
        store: &str,
        group: Option<&str>,
        include_inactive: bool,
    ) -> RepoResult<Vec<Modifier>> {
        let mut query = String::from("SELECT * FROM modifier WHERE store = $store");
        if group.is_some() {
            // backticks: `group` is a SurrealQL keyword
            query.push_str(" AND `group` = $group");
        }
        if !include_inactive {
            query.push_str(" AND is_active = true");
        }
        query.push_str(" ORDER BY name");

        let group = match group {
            Some(id) => Some(BaseRepository::parse_id("modifier_group", id)?.to_string()),
            None => None,
        };

        let modifiers: Vec<Modifier> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .bind(("group", group))
            .await?
            .take(0)?;
        Ok(modifiers)
    }

    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<Modifier>> {
        let thing = BaseRepository::parse_id("modifier", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let modifiers: Vec<Modifier> = result.take(0)?;
        Ok(modifiers.into_iter().next())
    }

    /// Find active modifiers by id list, used when pricing an order
    pub async fn find_active_by_ids(
        &self,
        store: &str,
        ids: &[surrealdb::RecordId],
    ) -> RepoResult<Vec<Modifier>> {
        let modifiers: Vec<Modifier> = self
            .base
            .db()
            .query("SELECT * FROM modifier WHERE store = $store AND is_active = true AND id IN $ids")
            .bind(("store", store.to_string()))
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(modifiers)
    }

    pub async fn create(&self, store: &str, data: ModifierCreate) -> RepoResult<Modifier> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE modifier SET
                    store = $store,
                    `group` = $group,
                    name = $name,
                    price_delta = $price_delta,
                    is_active = true
                RETURN AFTER"#,
            )
            .bind(("store", store.to_string()))
            .bind(("group", data.group.to_string()))
            .bind(("name", data.name))
            .bind(("price_delta", data.price_delta))
            .await?;
        let created: Option<Modifier> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create modifier".to_string()))
    }

    pub async fn update(&self, store: &str, id: &str, data: ModifierUpdate) -> RepoResult<Modifier> {
        let thing = BaseRepository::parse_id("modifier", id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    price_delta = IF $has_delta THEN $price_delta ELSE price_delta END,
                    is_active = IF $has_active THEN $is_active ELSE is_active END
                WHERE store = $store
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("has_delta", data.price_delta.is_some()))
            .bind(("price_delta", data.price_delta))
            .bind(("has_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .await?;
        let updated: Option<Modifier> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Modifier {} not found", id)))
    }

    pub async fn deactivate(&self, store: &str, id: &str) -> RepoResult<Modifier> {
        let thing = BaseRepository::parse_id("modifier", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false WHERE store = $store RETURN AFTER")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let updated: Option<Modifier> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Modifier {} not found", id)))
    }
}
