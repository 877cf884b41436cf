//! Shared types for KAMS POS
//!
//! Error codes, the application error type and the API response envelope used
//! by both the server and till clients.

pub mod error;
pub mod response;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
