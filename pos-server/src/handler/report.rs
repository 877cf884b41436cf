//! Sales Report Handler
//!
//! Thin aggregation over completed orders: one ranged read, summarized
//! in process with exact decimal arithmetic.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::StoreAuth;
use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError};

const TOP_ITEMS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct SalesReportQuery {
    /// Inclusive range start: RFC 3339, a plain date, or Unix milliseconds
    pub from: Option<String>,
    /// Exclusive range end, same formats
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TopItem {
    pub name: String,
    pub quantity: u64,
    pub gross: Decimal,
}

#[derive(Debug, Serialize)]
pub struct SalesReport {
    pub from: i64,
    pub to: i64,
    pub order_count: usize,
    pub gross: Decimal,
    pub average_order_value: Decimal,
    pub top_items: Vec<TopItem>,
}

pub async fn sales(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Query(query): Query<SalesReportQuery>,
) -> Result<Json<ApiResponse<SalesReport>>, AppError> {
    let from = match query.from.as_deref() {
        Some(raw) => parse_time(raw).ok_or_else(|| AppError::validation("Invalid 'from' date"))?,
        None => 0,
    };
    let to = match query.to.as_deref() {
        Some(raw) => parse_time(raw).ok_or_else(|| AppError::validation("Invalid 'to' date"))?,
        None => Utc::now().timestamp_millis(),
    };
    if from > to {
        return Err(AppError::validation("'from' must not be after 'to'"));
    }

    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_completed_between(&store_id, from, to).await?;
    Ok(ok(summarize(from, to, &orders)))
}

fn summarize(from: i64, to: i64, orders: &[Order]) -> SalesReport {
    let gross: Decimal = orders.iter().map(|o| o.total).sum();
    let order_count = orders.len();
    let average_order_value = if order_count > 0 {
        (gross / Decimal::from(order_count as u64)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let mut by_item: HashMap<&str, (u64, Decimal)> = HashMap::new();
    for order in orders {
        for item in &order.items {
            let entry = by_item.entry(item.name.as_str()).or_default();
            entry.0 += u64::from(item.quantity);
            entry.1 += item.line_total;
        }
    }
    let mut top_items: Vec<TopItem> = by_item
        .into_iter()
        .map(|(name, (quantity, gross))| TopItem {
            name: name.to_string(),
            quantity,
            gross,
        })
        .collect();
    top_items.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.name.cmp(&b.name)));
    top_items.truncate(TOP_ITEMS);

    SalesReport {
        from,
        to,
        order_count,
        gross,
        average_order_value,
        top_items,
    }
}

/// Parse a range bound: Unix millis, RFC 3339, or YYYY-MM-DD (UTC midnight)
fn parse_time(raw: &str) -> Option<i64> {
    if let Ok(millis) = raw.parse::<i64>() {
        return Some(millis);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(
            date.and_hms_opt(0, 0, 0)?
                .and_utc()
                .timestamp_millis(),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{OrderItem, OrderStatus, OrderType};

    fn order(total: &str, items: Vec<(&str, u32, &str)>) -> Order {
        Order {
            id: None,
            store: "store_a".to_string(),
            employee: "employee:alice".parse().unwrap(),
            customer: None,
            order_type: OrderType::Takeout,
            status: OrderStatus::Completed,
            items: items
                .into_iter()
                .map(|(name, quantity, line_total)| OrderItem {
                    menu_item: "menu_item:x".parse().unwrap(),
                    name: name.to_string(),
                    unit_price: Decimal::ZERO,
                    quantity,
                    modifiers: Vec::new(),
                    line_total: line_total.parse().unwrap(),
                })
                .collect(),
            subtotal: total.parse().unwrap(),
            tax: Decimal::ZERO,
            total: total.parse().unwrap(),
            note: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_summarize_empty_range() {
        let report = summarize(0, 100, &[]);
        assert_eq!(report.order_count, 0);
        assert_eq!(report.gross, Decimal::ZERO);
        assert_eq!(report.average_order_value, Decimal::ZERO);
        assert!(report.top_items.is_empty());
    }

    #[test]
    fn test_summarize_totals_and_top_items() {
        let orders = vec![
            order("20.00", vec![("Margherita", 2, "18.00"), ("Cola", 1, "2.00")]),
            order("9.00", vec![("Margherita", 1, "9.00")]),
        ];
        let report = summarize(0, 100, &orders);
        assert_eq!(report.order_count, 2);
        assert_eq!(report.gross, "29.00".parse::<Decimal>().unwrap());
        assert_eq!(
            report.average_order_value,
            "14.50".parse::<Decimal>().unwrap()
        );
        assert_eq!(report.top_items[0].name, "Margherita");
        assert_eq!(report.top_items[0].quantity, 3);
        assert_eq!(
            report.top_items[0].gross,
            "27.00".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("1700000000000"), Some(1700000000000));
        assert_eq!(
            parse_time("2026-01-01"),
            Some(
                NaiveDate::from_ymd_opt(2026, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    .and_utc()
                    .timestamp_millis()
            )
        );
        assert!(parse_time("2026-01-01T12:00:00Z").is_some());
        assert_eq!(parse_time("yesterday"), None);
    }
}
