//! Order Handlers
//!
//! Order capture prices everything server-side: the client sends menu item
//! and modifier ids with quantities, and the handler resolves unit prices,
//! modifier deltas and tax from the database.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth::OperatorAuth;
use crate::core::ServerState;
use crate::db::models::{
    Employee, Order, OrderCreate, OrderItem, OrderItemModifier, OrderStatus, now_millis,
};
use crate::db::repository::{
    CustomerRepository, MenuItemRepository, ModifierRepository, OrderRepository,
    StoreProfileRepository,
};
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<OrderStatus>,
}

pub async fn list(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<ApiResponse<Vec<Order>>>, AppError> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all(&operator.store, query.status).await?;
    Ok(ok(orders))
}

pub async fn get(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&operator.store, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    Ok(ok(order))
}

/// Capture a new order
pub async fn create(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<OrderCreate>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    if req.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    if req.items.iter().any(|line| line.quantity == 0) {
        return Err(AppError::validation("Quantity must be at least 1"));
    }

    let store = operator.store.clone();
    let order = price_order(&state, &operator, req).await?;

    let repo = OrderRepository::new(state.get_db());
    let created = repo.create(order).await?;

    tracing::info!(
        store = %store,
        order = %created.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
        total = %created.total,
        "Order captured"
    );
    Ok(ok(created))
}

pub async fn complete(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    transition(&state, &operator.store, &id, OrderStatus::Completed).await
}

pub async fn cancel(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    transition(&state, &operator.store, &id, OrderStatus::Cancelled).await
}

/// Move an order out of OPEN
///
/// The write itself is conditional on the current status, so a losing
/// concurrent request observes the other side's terminal state.
async fn transition(
    state: &ServerState,
    store: &str,
    id: &str,
    new_status: OrderStatus,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let repo = OrderRepository::new(state.get_db());
    let existing = repo
        .find_by_id(store, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    match repo.set_status_if_open(store, id, new_status).await? {
        Some(order) => Ok(ok(order)),
        None => Err(terminal_status_error(existing.status)),
    }
}

fn terminal_status_error(status: OrderStatus) -> AppError {
    match status {
        OrderStatus::Completed => AppError::new(ErrorCode::OrderAlreadyCompleted),
        OrderStatus::Cancelled => AppError::new(ErrorCode::OrderAlreadyCancelled),
        // Lost a race after reading OPEN
        OrderStatus::Open => AppError::validation("Order status changed concurrently"),
    }
}

/// Resolve prices and build the order row
async fn price_order(
    state: &ServerState,
    operator: &Employee,
    req: OrderCreate,
) -> Result<Order, AppError> {
    let store = operator.store.as_str();

    if let Some(customer) = &req.customer {
        let customers = CustomerRepository::new(state.get_db());
        customers
            .find_by_id(store, &customer.to_string())
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| AppError::with_message(ErrorCode::NotFound, "Customer not found"))?;
    }

    let item_ids: Vec<surrealdb::RecordId> =
        req.items.iter().map(|line| line.menu_item.clone()).collect();
    let items_repo = MenuItemRepository::new(state.get_db());
    let menu_items = items_repo.find_active_by_ids(store, &item_ids).await?;
    let menu_by_id: HashMap<String, _> = menu_items
        .into_iter()
        .filter_map(|item| {
            let key = item.id.as_ref()?.to_string();
            Some((key, item))
        })
        .collect();

    let modifier_ids: Vec<surrealdb::RecordId> = req
        .items
        .iter()
        .flat_map(|line| line.modifiers.iter().cloned())
        .collect();
    let modifiers_repo = ModifierRepository::new(state.get_db());
    let modifiers = if modifier_ids.is_empty() {
        Vec::new()
    } else {
        modifiers_repo.find_active_by_ids(store, &modifier_ids).await?
    };
    let modifier_by_id: HashMap<String, _> = modifiers
        .into_iter()
        .filter_map(|m| {
            let key = m.id.as_ref()?.to_string();
            Some((key, m))
        })
        .collect();

    let mut order_items = Vec::with_capacity(req.items.len());
    let mut subtotal = Decimal::ZERO;

    for line in &req.items {
        let menu_item = menu_by_id
            .get(&line.menu_item.to_string())
            .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;

        let mut chosen = Vec::with_capacity(line.modifiers.len());
        let mut delta_sum = Decimal::ZERO;
        for modifier_id in &line.modifiers {
            let modifier = modifier_by_id
                .get(&modifier_id.to_string())
                .ok_or_else(|| AppError::new(ErrorCode::ModifierNotFound))?;
            if !menu_item.modifier_groups.contains(&modifier.group) {
                return Err(AppError::validation(format!(
                    "Modifier '{}' is not offered with '{}'",
                    modifier.name, menu_item.name
                )));
            }
            delta_sum += modifier.price_delta;
            chosen.push(OrderItemModifier {
                modifier: modifier_id.clone(),
                name: modifier.name.clone(),
                price_delta: modifier.price_delta,
            });
        }

        let quantity = Decimal::from(line.quantity);
        let line_total = ((menu_item.price + delta_sum) * quantity).round_dp(2);
        subtotal += line_total;

        order_items.push(OrderItem {
            menu_item: line.menu_item.clone(),
            name: menu_item.name.clone(),
            unit_price: menu_item.price,
            quantity: line.quantity,
            modifiers: chosen,
            line_total,
        });
    }

    let profiles = StoreProfileRepository::new(state.get_db());
    let tax_rate = profiles
        .get(store)
        .await?
        .map(|p| p.tax_rate)
        .unwrap_or(Decimal::ZERO);
    let tax = (subtotal * tax_rate / Decimal::ONE_HUNDRED).round_dp(2);

    let employee = operator
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Operator record has no id"))?;

    Ok(Order {
        id: None,
        store: store.to_string(),
        employee,
        customer: req.customer,
        order_type: req.order_type,
        status: OrderStatus::Open,
        items: order_items,
        subtotal,
        tax,
        total: subtotal + tax,
        note: req.note,
        created_at: now_millis(),
    })
}
