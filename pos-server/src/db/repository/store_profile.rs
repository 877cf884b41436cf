//! Store Profile Repository
//!
//! One profile row per store account; the store id doubles as the record
//! key, so writes are natural upserts.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{StoreProfile, StoreProfileUpsert};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct StoreProfileRepository {
    base: BaseRepository,
}

impl StoreProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn get(&self, store: &str) -> RepoResult<Option<StoreProfile>> {
        let thing = surrealdb::RecordId::from_table_key("store_profile", store);
        let profile: Option<StoreProfile> = self.base.db().select(thing).await?;
        Ok(profile)
    }

    pub async fn upsert(&self, store: &str, data: StoreProfileUpsert) -> RepoResult<StoreProfile> {
        let thing = surrealdb::RecordId::from_table_key("store_profile", store);
        let mut result = self
            .base
            .db()
            .query(
                r#"UPSERT $thing SET
                    store = $store,
                    name = $name,
                    address = $address,
                    phone = $phone,
                    tax_rate = $tax_rate,
                    receipt_footer = $receipt_footer,
                    currency = $currency
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("store", store.to_string()))
            .bind(("name", data.name))
            .bind(("address", data.address))
            .bind(("phone", data.phone))
            .bind(("tax_rate", data.tax_rate))
            .bind(("receipt_footer", data.receipt_footer))
            .bind(("currency", data.currency))
            .await?;
        let profile: Option<StoreProfile> = result.take(0)?;
        profile.ok_or_else(|| RepoError::Database("Failed to upsert store profile".to_string()))
    }
}
