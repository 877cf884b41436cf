//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find menu items, optionally limited to one category
    pub async fn find_all(
        &self,
        store: &str,
        category: Option<&str>,
        include_inactive: bool,
    ) -> RepoResult<Vec<MenuItem>> {
        let mut query = String::from("SELECT * FROM menu_item WHERE store = $store");
        if category.is_some() {
            query.push_str(" AND category = $category");
        }
        if !include_inactive {
            query.push_str(" AND is_active = true");
        }
        query.push_str(" ORDER BY sort_order, name");

        let category = match category {
            Some(id) => Some(BaseRepository::parse_id("category", id)?.to_string()),
            None => None,
        };

        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<MenuItem>> {
        let thing = BaseRepository::parse_id("menu_item", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Find active items by id list, used when pricing an order
    pub async fn find_active_by_ids(
        &self,
        store: &str,
        ids: &[surrealdb::RecordId],
    ) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE store = $store AND is_active = true AND id IN $ids")
            .bind(("store", store.to_string()))
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Count active items referencing a category
    pub async fn count_active_in_category(&self, store: &str, category: &str) -> RepoResult<usize> {
        let category = BaseRepository::parse_id("category", category)?.to_string();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT id FROM menu_item WHERE store = $store AND category = $category AND is_active = true",
            )
            .bind(("store", store.to_string()))
            .bind(("category", category))
            .await?;
        let rows: Vec<serde_json::Value> = result.take(0)?;
        Ok(rows.len())
    }

    pub async fn create(&self, store: &str, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let modifier_groups: Vec<String> =
            data.modifier_groups.iter().map(|g| g.to_string()).collect();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE menu_item SET
                    store = $store,
                    category = $category,
                    name = $name,
                    description = $description,
                    price = $price,
                    image_url = $image_url,
                    sort_order = $sort_order,
                    is_active = true,
                    modifier_groups = $modifier_groups
                RETURN AFTER"#,
            )
            .bind(("store", store.to_string()))
            .bind(("category", data.category.to_string()))
            .bind(("name", data.name))
            .bind(("description", data.description))
            .bind(("price", data.price))
            .bind(("image_url", data.image_url))
            .bind(("sort_order", data.sort_order))
            .bind(("modifier_groups", modifier_groups))
            .await?;
        let created: Option<MenuItem> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn update(&self, store: &str, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let thing = BaseRepository::parse_id("menu_item", id)?;
        let category = data.category.as_ref().map(|c| c.to_string());
        let modifier_groups = data
            .modifier_groups
            .as_ref()
            .map(|groups| groups.iter().map(|g| g.to_string()).collect::<Vec<_>>());

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    category = $category OR category,
                    name = $name OR name,
                    description = IF $has_description THEN $description ELSE description END,
                    price = IF $has_price THEN $price ELSE price END,
                    image_url = IF $has_image THEN $image_url ELSE image_url END,
                    sort_order = IF $has_sort THEN $sort_order ELSE sort_order END,
                    is_active = IF $has_active THEN $is_active ELSE is_active END,
                    modifier_groups = IF $has_groups THEN $modifier_groups ELSE modifier_groups END
                WHERE store = $store
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("category", category))
            .bind(("name", data.name))
            .bind(("has_description", data.description.is_some()))
            .bind(("description", data.description))
            .bind(("has_price", data.price.is_some()))
            .bind(("price", data.price))
            .bind(("has_image", data.image_url.is_some()))
            .bind(("image_url", data.image_url))
            .bind(("has_sort", data.sort_order.is_some()))
            .bind(("sort_order", data.sort_order))
            .bind(("has_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .bind(("has_groups", modifier_groups.is_some()))
            .bind(("modifier_groups", modifier_groups))
            .await?;
        let updated: Option<MenuItem> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    pub async fn deactivate(&self, store: &str, id: &str) -> RepoResult<MenuItem> {
        let thing = BaseRepository::parse_id("menu_item", id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET is_active = false WHERE store = $store RETURN AFTER")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let updated: Option<MenuItem> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }
}
