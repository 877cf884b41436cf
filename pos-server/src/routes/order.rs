//! Order Routes

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;
use crate::handler::order;

/// Build order router (operator tier throughout)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", get(order::list))
        .route("/api/orders", post(order::create))
        .route("/api/orders/{id}", get(order::get))
        .route("/api/orders/{id}/complete", post(order::complete))
        .route("/api/orders/{id}/cancel", post(order::cancel))
}
