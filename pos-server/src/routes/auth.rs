//! Authentication Routes

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;
use crate::handler::auth;

/// Build authentication router
/// - /api/auth/pin: store session required, establishes the till session
/// - /api/auth/logout: store session required, clears the till cookie
/// - /api/auth/me: open, reports the resolver result for both tiers
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/pin", post(auth::verify_pin))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
}
