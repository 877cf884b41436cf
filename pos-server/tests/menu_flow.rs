//! Menu and customer management flows

mod common;

use common::*;
use http::StatusCode;
use pos_server::db::models::Role;
use serde_json::json;

async fn operator_fixture() -> (pos_server::core::ServerState, axum::Router, String) {
    let state = test_state().await;
    let operator = seed_employee(&state, STORE_A, "Alice", Role::Admin, "1234").await;
    let app = test_app(&state);
    (state, app, operator)
}

#[tokio::test]
async fn test_menu_reads_need_only_store_session() {
    let (_state, app, _operator) = operator_fixture().await;

    let response = send(
        &app,
        request("GET", "/api/categories", &[(SESSION_COOKIE, TOKEN_A)], None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Mutations need the operator tier
    let response = send(
        &app,
        request(
            "POST",
            "/api/categories",
            &[(SESSION_COOKIE, TOKEN_A)],
            Some(json!({"name": "Pizza"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_category_with_active_items_cannot_be_deactivated() {
    let (_state, app, operator) = operator_fixture().await;
    let cookies: &[(&str, &str)] = &[(SESSION_COOKIE, TOKEN_A), (EMPLOYEE_COOKIE, &operator)];

    let response = send(
        &app,
        request("POST", "/api/categories", cookies, Some(json!({"name": "Pizza"}))),
    )
    .await;
    let category = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        request("POST", "/api/menu-items", cookies, Some(json!({
            "category": category, "name": "Margherita", "price": "9.00"
        }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let item = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        request("DELETE", &format!("/api/categories/{category}"), cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // After deactivating the item the category can go
    let response = send(
        &app,
        request("DELETE", &format!("/api/menu-items/{item}"), cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        request("DELETE", &format!("/api/categories/{category}"), cookies, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["is_active"], json!(false));
}

#[tokio::test]
async fn test_deactivated_items_hidden_unless_requested() {
    let (_state, app, operator) = operator_fixture().await;
    let cookies: &[(&str, &str)] = &[(SESSION_COOKIE, TOKEN_A), (EMPLOYEE_COOKIE, &operator)];

    let response = send(
        &app,
        request("POST", "/api/categories", cookies, Some(json!({"name": "Drinks"}))),
    )
    .await;
    let category = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    for name in ["Cola", "Water"] {
        send(
            &app,
            request("POST", "/api/menu-items", cookies, Some(json!({
                "category": category, "name": name, "price": "2.00"
            }))),
        )
        .await;
    }

    let response = send(&app, request("GET", "/api/menu-items", cookies, None)).await;
    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let cola = items
        .iter()
        .find(|i| i["name"] == json!("Cola"))
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    send(
        &app,
        request("DELETE", &format!("/api/menu-items/{cola}"), cookies, None),
    )
    .await;

    let response = send(&app, request("GET", "/api/menu-items", cookies, None)).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = send(
        &app,
        request("GET", "/api/menu-items?include_inactive=true", cookies, None),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_menu_item_requires_existing_category() {
    let (_state, app, operator) = operator_fixture().await;
    let cookies: &[(&str, &str)] = &[(SESSION_COOKIE, TOKEN_A), (EMPLOYEE_COOKIE, &operator)];

    let response = send(
        &app,
        request("POST", "/api/menu-items", cookies, Some(json!({
            "category": "category:ghost", "name": "Margherita", "price": "9.00"
        }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_search_by_name_and_phone() {
    let (_state, app, operator) = operator_fixture().await;
    let cookies: &[(&str, &str)] = &[(SESSION_COOKIE, TOKEN_A), (EMPLOYEE_COOKIE, &operator)];

    for (name, phone) in [("Mario Rossi", "555-1234"), ("Luigi Verdi", "555-9876")] {
        let response = send(
            &app,
            request("POST", "/api/customers", cookies, Some(json!({
                "name": name, "phone": phone
            }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(
        &app,
        request("GET", "/api/customers?search=mario", cookies, None),
    )
    .await;
    let body = body_json(response).await;
    let found = body["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], json!("Mario Rossi"));

    let response = send(
        &app,
        request("GET", "/api/customers?search=9876", cookies, None),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = send(&app, request("GET", "/api/customers", cookies, None)).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_store_profile_upsert_overwrites() {
    let (_state, app, operator) = operator_fixture().await;
    let cookies: &[(&str, &str)] = &[(SESSION_COOKIE, TOKEN_A), (EMPLOYEE_COOKIE, &operator)];

    // No profile yet
    let response = send(&app, request("GET", "/api/store", cookies, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for tax_rate in ["8.25", "10"] {
        let response = send(
            &app,
            request("PUT", "/api/store", cookies, Some(json!({
                "name": "KAMS Pizzeria", "tax_rate": tax_rate
            }))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(&app, request("GET", "/api/store", cookies, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["tax_rate"], json!("10"));
    assert_eq!(body["data"]["name"], json!("KAMS Pizzeria"));
}
