//! KAMS POS Server - point-of-sale backend for a single-location food retailer
//!
//! # Architecture Overview
//!
//! The server is a CRUD-style HTTP API: route handlers validate a request,
//! perform one or a few store-scoped repository calls and return JSON.
//!
//! - **Authentication** (`auth`): two-tier scheme - an outer store session
//!   verified through the external identity provider, and an inner
//!   till-operator session carried by an application-owned cookie and
//!   re-validated against the database on every request
//! - **Database** (`db`): embedded SurrealDB storage with a repository layer
//! - **HTTP API** (`routes` + `handler`): menu, customers, orders, employees,
//!   store profile and sales reports
//!
//! # Module Structure
//!
//! ```text
//! pos-server/src/
//! ├── core/        # Config, state, server
//! ├── auth/        # Session resolver, PIN login, extractors
//! ├── db/          # Models and repositories
//! ├── handler/     # Request handlers
//! ├── routes/      # Router assembly
//! ├── middleware/  # Request logging
//! └── utils/       # Logger, response helpers
//! ```

pub mod auth;
pub mod core;
pub mod db;
pub mod handler;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export public types
pub use crate::auth::{AuthSession, HttpIdentityProvider, IdentityProvider, StaticIdentityProvider};
pub use crate::core::{Config, Server, ServerState};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured auth events via tracing
#[macro_export]
macro_rules! security_log {
    ($($arg:tt)*) => {
        tracing::info!(target: "security", $($arg)*);
    };
}
