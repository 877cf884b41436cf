//! Store Profile Model
//!
//! One row per store account, written via upsert.

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProfile {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub store: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Sales tax percentage, e.g. 8.25
    #[serde(default)]
    pub tax_rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_footer: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreProfileUpsert {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub tax_rate: Decimal,
    pub receipt_footer: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}
