//! Order Model
//!
//! Line items snapshot the menu name and unit price at capture time, so
//! later menu edits never rewrite order history. Totals are computed
//! server-side from the menu rows; clients never supply prices.

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type OrderId = RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    DineIn,
    Takeout,
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Chosen modifier snapshot inside a line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemModifier {
    #[serde(with = "serde_helpers::record_id")]
    pub modifier: RecordId,
    pub name: String,
    pub price_delta: Decimal,
}

/// Order line item with price snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub modifiers: Vec<OrderItemModifier>,
    /// (unit_price + modifier deltas) * quantity
    pub line_total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    pub store: String,
    /// Till operator who rang the order
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub customer: Option<RecordId>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Unix milliseconds
    pub created_at: i64,
}

/// Requested line item, prices resolved server-side
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub quantity: u32,
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub modifiers: Vec<RecordId>,
}

/// Create order payload
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub customer: Option<RecordId>,
    pub order_type: OrderType,
    pub items: Vec<OrderLineCreate>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Open).unwrap(),
            serde_json::json!("OPEN")
        );
        assert_eq!(
            serde_json::to_value(OrderType::DineIn).unwrap(),
            serde_json::json!("DINE_IN")
        );
    }

    #[test]
    fn test_order_create_deserializes_string_refs() {
        let payload: OrderCreate = serde_json::from_str(
            r#"{
                "order_type": "TAKEOUT",
                "items": [
                    {"menu_item": "menu_item:margherita", "quantity": 2,
                     "modifiers": ["modifier:extra_cheese"]}
                ],
                "note": null
            }"#,
        )
        .unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].quantity, 2);
        assert_eq!(
            payload.items[0].modifiers[0].to_string(),
            "modifier:extra_cheese"
        );
        assert!(payload.customer.is_none());
    }
}
