//! Store Profile Routes

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;
use crate::handler::store_profile;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/store", get(store_profile::get))
        .route("/api/store", put(store_profile::upsert))
}
