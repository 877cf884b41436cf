//! Menu Item Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type MenuItemId = RecordId;

/// Sellable menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    pub store: String,
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    /// Modifier groups offered with this item
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub modifier_groups: Vec<RecordId>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub modifier_groups: Vec<RecordId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub category: Option<RecordId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    #[serde(default, with = "serde_helpers::option_vec_record_id")]
    pub modifier_groups: Option<Vec<RecordId>>,
}
