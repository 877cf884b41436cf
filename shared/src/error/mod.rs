//! Unified error system for KAMS POS
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`AppError`]: rich error type with codes, messages and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

pub mod codes;
pub mod http;
pub mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
