//! Employee Routes

use axum::{Router, routing::delete, routing::get, routing::post, routing::put};

use crate::core::ServerState;
use crate::handler::employee;

/// Build employee router
/// - listing: store session only (the till login screen needs the roster)
/// - mutations: admin operator
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(employee::list))
        .route("/api/employees", post(employee::create))
        .route("/api/employees/{id}", put(employee::update))
        .route("/api/employees/{id}", delete(employee::deactivate))
}
