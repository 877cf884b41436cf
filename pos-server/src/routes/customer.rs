//! Customer Routes

use axum::{Router, routing::delete, routing::get, routing::post, routing::put};

use crate::core::ServerState;
use crate::handler::customer;

/// Build customer router (operator tier throughout)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/customers", get(customer::list))
        .route("/api/customers", post(customer::create))
        .route("/api/customers/{id}", get(customer::get))
        .route("/api/customers/{id}", put(customer::update))
        .route("/api/customers/{id}", delete(customer::deactivate))
}
