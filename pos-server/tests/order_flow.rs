//! Order capture, status transitions and sales reporting

mod common;

use common::*;
use http::StatusCode;
use pos_server::db::models::Role;
use serde_json::json;

struct Fixture {
    state: pos_server::core::ServerState,
    app: axum::Router,
    operator: Vec<(String, String)>,
    margherita: String,
    extra_cheese: String,
}

impl Fixture {
    fn cookies(&self) -> Vec<(&str, &str)> {
        self.operator
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }
}

/// Seed a store with an operator, a category, a priced menu and a 10% tax
/// profile, all through the API
async fn fixture() -> Fixture {
    let state = test_state().await;
    let operator_id = seed_employee(&state, STORE_A, "Alice", Role::Admin, "1234").await;
    let app = test_app(&state);
    let operator = vec![
        (SESSION_COOKIE.to_string(), TOKEN_A.to_string()),
        (EMPLOYEE_COOKIE.to_string(), operator_id),
    ];
    let cookies: Vec<(&str, &str)> = operator
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();

    let response = send(
        &app,
        request("PUT", "/api/store", &cookies, Some(json!({
            "name": "KAMS Pizzeria",
            "tax_rate": "10",
            "currency": "EUR"
        }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        request("POST", "/api/categories", &cookies, Some(json!({"name": "Pizza"}))),
    )
    .await;
    let category = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        request("POST", "/api/modifier-groups", &cookies, Some(json!({
            "name": "Toppings", "min_select": 0, "max_select": 3
        }))),
    )
    .await;
    let group = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        request("POST", "/api/modifiers", &cookies, Some(json!({
            "group": group, "name": "Extra cheese", "price_delta": "1.50"
        }))),
    )
    .await;
    let extra_cheese = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        request("POST", "/api/menu-items", &cookies, Some(json!({
            "category": category,
            "name": "Margherita",
            "price": "9.00",
            "modifier_groups": [group]
        }))),
    )
    .await;
    let margherita = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    Fixture {
        state,
        app,
        operator,
        margherita,
        extra_cheese,
    }
}

#[tokio::test]
async fn test_order_totals_computed_server_side() {
    let fx = fixture().await;
    let cookies = fx.cookies();

    let response = send(
        &fx.app,
        request("POST", "/api/orders", &cookies, Some(json!({
            "order_type": "TAKEOUT",
            "items": [
                {"menu_item": fx.margherita, "quantity": 2, "modifiers": [fx.extra_cheese]}
            ]
        }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let order = &body["data"];

    // (9.00 + 1.50) * 2 = 21.00, tax 10% = 2.10
    assert_eq!(order["subtotal"], json!("21.00"));
    assert_eq!(order["tax"], json!("2.10"));
    assert_eq!(order["total"], json!("23.10"));
    assert_eq!(order["status"], json!("OPEN"));
    assert_eq!(order["items"][0]["unit_price"], json!("9.00"));
    assert_eq!(order["items"][0]["modifiers"][0]["price_delta"], json!("1.50"));
}

#[tokio::test]
async fn test_empty_order_rejected() {
    let fx = fixture().await;
    let cookies = fx.cookies();

    let response = send(
        &fx.app,
        request("POST", "/api/orders", &cookies, Some(json!({
            "order_type": "DINE_IN",
            "items": []
        }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_menu_item_rejected() {
    let fx = fixture().await;
    let cookies = fx.cookies();

    let response = send(
        &fx.app,
        request("POST", "/api/orders", &cookies, Some(json!({
            "order_type": "DINE_IN",
            "items": [{"menu_item": "menu_item:ghost", "quantity": 1}]
        }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_transitions_are_terminal() {
    let fx = fixture().await;
    let cookies = fx.cookies();

    let response = send(
        &fx.app,
        request("POST", "/api/orders", &cookies, Some(json!({
            "order_type": "TAKEOUT",
            "items": [{"menu_item": fx.margherita, "quantity": 1}]
        }))),
    )
    .await;
    let order_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &fx.app,
        request("POST", &format!("/api/orders/{order_id}/complete"), &cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], json!("COMPLETED"));

    // Completing again or cancelling a completed order fails
    let response = send(
        &fx.app,
        request("POST", &format!("/api/orders/{order_id}/complete"), &cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &fx.app,
        request("POST", &format!("/api/orders/{order_id}/cancel"), &cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sales_report_counts_completed_orders_only() {
    let fx = fixture().await;
    let cookies = fx.cookies();

    for _ in 0..2 {
        let response = send(
            &fx.app,
            request("POST", "/api/orders", &cookies, Some(json!({
                "order_type": "TAKEOUT",
                "items": [{"menu_item": fx.margherita, "quantity": 1}]
            }))),
        )
        .await;
        let order_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        send(
            &fx.app,
            request("POST", &format!("/api/orders/{order_id}/complete"), &cookies, None),
        )
        .await;
    }

    // One order stays open and must not count
    send(
        &fx.app,
        request("POST", "/api/orders", &cookies, Some(json!({
            "order_type": "DINE_IN",
            "items": [{"menu_item": fx.margherita, "quantity": 5}]
        }))),
    )
    .await;

    let response = send(
        &fx.app,
        request("GET", "/api/reports/sales", &cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let report = &body["data"];
    assert_eq!(report["order_count"], json!(2));
    // 2 x 9.00 + 10% tax
    assert_eq!(report["gross"], json!("19.80"));
    assert_eq!(report["average_order_value"], json!("9.90"));
    assert_eq!(report["top_items"][0]["name"], json!("Margherita"));
    assert_eq!(report["top_items"][0]["quantity"], json!(2));
}

#[tokio::test]
async fn test_orders_not_visible_across_stores() {
    let fx = fixture().await;
    let cookies = fx.cookies();

    send(
        &fx.app,
        request("POST", "/api/orders", &cookies, Some(json!({
            "order_type": "TAKEOUT",
            "items": [{"menu_item": fx.margherita, "quantity": 1}]
        }))),
    )
    .await;

    // A store B operator sees an empty order list
    let bea = seed_employee(&fx.state, STORE_B, "Bea", Role::Cashier, "1234").await;
    let response = send(
        &fx.app,
        request(
            "GET",
            "/api/orders",
            &[(SESSION_COOKIE, TOKEN_B), (EMPLOYEE_COOKIE, &bea)],
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
