//! Order Repository
//!
//! The `order` table name is a SurrealQL keyword, hence the backticks.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a fully-priced order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let mut result = self
            .base
            .db()
            .query("CREATE `order` CONTENT $data RETURN AFTER")
            .bind(("data", order))
            .await?;
        let created: Option<Order> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find orders of a store, newest first, optionally filtered by status
    pub async fn find_all(
        &self,
        store: &str,
        status: Option<OrderStatus>,
    ) -> RepoResult<Vec<Order>> {
        let mut query = String::from("SELECT * FROM `order` WHERE store = $store");
        if status.is_some() {
            query.push_str(" AND status = $status");
        }
        query.push_str(" ORDER BY created_at DESC");

        let orders: Vec<Order> = self
            .base
            .db()
            .query(query)
            .bind(("store", store.to_string()))
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, store: &str, id: &str) -> RepoResult<Option<Order>> {
        let thing = BaseRepository::parse_id("order", id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing WHERE store = $store")
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Transition an order out of OPEN
    ///
    /// The status check lives in the UPDATE's WHERE clause, so a concurrent
    /// complete/cancel pair cannot both win. `None` means the order was not
    /// in OPEN state at write time (or does not exist).
    pub async fn set_status_if_open(
        &self,
        store: &str,
        id: &str,
        new_status: OrderStatus,
    ) -> RepoResult<Option<Order>> {
        let thing = BaseRepository::parse_id("order", id)?;
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET status = $new_status
                WHERE store = $store AND status = 'OPEN'
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("new_status", new_status))
            .await?;
        let updated: Option<Order> = result.take(0)?;
        Ok(updated)
    }

    /// Completed orders in the half-open range `[from, to)` (Unix millis)
    pub async fn find_completed_between(
        &self,
        store: &str,
        from: i64,
        to: i64,
    ) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query(
                r#"SELECT * FROM `order`
                WHERE store = $store AND status = 'COMPLETED'
                  AND created_at >= $from AND created_at < $to
                ORDER BY created_at"#,
            )
            .bind(("store", store.to_string()))
            .bind(("from", from))
            .bind(("to", to))
            .await?
            .take(0)?;
        Ok(orders)
    }
}
