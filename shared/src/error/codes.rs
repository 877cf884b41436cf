//! Unified error codes for KAMS POS
//!
//! Error codes are shared between the server and till clients and are
//! organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// No valid store session
    NotAuthenticated = 1001,
    /// Invalid credentials (bad PIN)
    InvalidCredentials = 1002,
    /// Store session has expired or was revoked
    SessionExpired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,
    /// Till operator session required
    OperatorRequired = 2006,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4002,
    /// Order has already been completed
    OrderAlreadyCompleted = 4003,
    /// Order has already been cancelled
    OrderAlreadyCancelled = 4004,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6002,
    /// Category still has active menu items
    CategoryHasItems = 6003,
    /// Modifier group not found
    ModifierGroupNotFound = 6004,
    /// Modifier not found
    ModifierNotFound = 6005,
    /// Category name already in use
    CategoryNameExists = 6006,

    // ==================== 8xxx: Employee ====================
    /// Employee not found (also used for cross-store and inactive lookups)
    EmployeeNotFound = 8001,
    /// Demotion would leave the store with zero active admins
    CannotRemoveLastAdmin = 8002,
    /// An employee may not deactivate their own record
    CannotDeactivateSelf = 8003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Identity provider unreachable or returned an error
    IdentityProviderError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",

            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid PIN",
            Self::SessionExpired => "Session expired",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",
            Self::OperatorRequired => "Till operator session required",

            Self::OrderNotFound => "Order not found",
            Self::OrderEmpty => "Order has no items",
            Self::OrderAlreadyCompleted => "Order has already been completed",
            Self::OrderAlreadyCancelled => "Order has already been cancelled",

            Self::MenuItemNotFound => "Menu item not found",
            Self::CategoryNotFound => "Category not found",
            Self::CategoryHasItems => "Category still has active menu items",
            Self::ModifierGroupNotFound => "Modifier group not found",
            Self::ModifierNotFound => "Modifier not found",
            Self::CategoryNameExists => "Category name already exists",

            Self::EmployeeNotFound => "Employee not found",
            Self::CannotRemoveLastAdmin => "Cannot remove the last admin",
            Self::CannotDeactivateSelf => "Cannot deactivate your own account",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::IdentityProviderError => "Identity provider error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1005 => Self::SessionExpired,

            2001 => Self::PermissionDenied,
            2003 => Self::AdminRequired,
            2006 => Self::OperatorRequired,

            4001 => Self::OrderNotFound,
            4002 => Self::OrderEmpty,
            4003 => Self::OrderAlreadyCompleted,
            4004 => Self::OrderAlreadyCancelled,

            6001 => Self::MenuItemNotFound,
            6002 => Self::CategoryNotFound,
            6003 => Self::CategoryHasItems,
            6004 => Self::ModifierGroupNotFound,
            6005 => Self::ModifierNotFound,
            6006 => Self::CategoryNameExists,

            8001 => Self::EmployeeNotFound,
            8002 => Self::CannotRemoveLastAdmin,
            8003 => Self::CannotDeactivateSelf,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::IdentityProviderError,

            _ => return Err(format!("Unknown error code: {}", value)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::EmployeeNotFound,
            ErrorCode::CannotRemoveLastAdmin,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(65000).is_err());
    }
}
