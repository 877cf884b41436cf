//! Menu Routes
//!
//! Categories, menu items, modifier groups and modifiers. Reads need the
//! store tier; mutations need a signed-in till operator.

use axum::{Router, routing::delete, routing::get, routing::post, routing::put};

use crate::core::ServerState;
use crate::handler::{category, menu_item, modifier, modifier_group};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categories", get(category::list))
        .route("/api/categories", post(category::create))
        .route("/api/categories/{id}", get(category::get))
        .route("/api/categories/{id}", put(category::update))
        .route("/api/categories/{id}", delete(category::deactivate))
        .route("/api/menu-items", get(menu_item::list))
        .route("/api/menu-items", post(menu_item::create))
        .route("/api/menu-items/{id}", get(menu_item::get))
        .route("/api/menu-items/{id}", put(menu_item::update))
        .route("/api/menu-items/{id}", delete(menu_item::deactivate))
        .route("/api/modifier-groups", get(modifier_group::list))
        .route("/api/modifier-groups", post(modifier_group::create))
        .route("/api/modifier-groups/{id}", get(modifier_group::get))
        .route("/api/modifier-groups/{id}", put(modifier_group::update))
        .route("/api/modifier-groups/{id}", delete(modifier_group::deactivate))
        .route("/api/modifiers", get(modifier::list))
        .route("/api/modifiers", post(modifier::create))
        .route("/api/modifiers/{id}", get(modifier::get))
        .route("/api/modifiers/{id}", put(modifier::update))
        .route("/api/modifiers/{id}", delete(modifier::deactivate))
}
