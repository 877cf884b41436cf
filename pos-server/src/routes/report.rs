//! Report Routes

use axum::{Router, routing::get};

use crate::core::ServerState;
use crate::handler::report;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reports/sales", get(report::sales))
}
