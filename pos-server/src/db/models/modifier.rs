//! Modifier Models
//!
//! A modifier group ("Toppings", "Size") owns modifiers carrying a price
//! delta relative to the base item price.

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroup {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub store: String,
    pub name: String,
    /// Minimum selections required when ordering (0 = optional)
    #[serde(default)]
    pub min_select: u32,
    /// Maximum selections allowed
    #[serde(default = "default_max_select")]
    pub max_select: u32,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

fn default_max_select() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifierGroupCreate {
    pub name: String,
    #[serde(default)]
    pub min_select: u32,
    #[serde(default = "default_max_select")]
    pub max_select: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifierGroupUpdate {
    pub name: Option<String>,
    pub min_select: Option<u32>,
    pub max_select: Option<u32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub store: String,
    #[serde(with = "serde_helpers::record_id")]
    pub group: RecordId,
    pub name: String,
    #[serde(default)]
    pub price_delta: Decimal,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifierCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub group: RecordId,
    pub name: String,
    #[serde(default)]
    pub price_delta: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifierUpdate {
    pub name: Option<String>,
    pub price_delta: Option<Decimal>,
    pub is_active: Option<bool>,
}
