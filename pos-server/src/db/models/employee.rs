//! Employee Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Till role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Cashier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Cashier => "CASHIER",
        }
    }
}

/// Employee model matching SurrealDB schema
///
/// The PIN hash never leaves the server: it is skipped on serialization, so
/// handlers can return the row as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<EmployeeId>,
    /// Store account id issued by the identity provider
    pub store: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub pin_hash: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

fn default_true() -> bool {
    true
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: Role,
    pub pin: String,
    pub email: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Update employee payload
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub pin: Option<String>,
    pub email: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Public employee fields, the shape returned by the auth endpoints
#[derive(Debug, Clone, Serialize)]
pub struct EmployeePublic {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Employee {
    /// Record id as "employee:key" string
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Public projection (never includes the PIN hash)
    pub fn public_info(&self) -> EmployeePublic {
        EmployeePublic {
            id: self.id_string(),
            name: self.name.clone(),
            role: self.role,
            metadata: self.metadata.clone(),
        }
    }

    /// Verify a PIN against the stored argon2 hash
    pub fn verify_pin(&self, pin: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.pin_hash)?;
        Ok(Argon2::default()
            .verify_password(pin.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a PIN using argon2
    pub fn hash_pin(pin: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let pin_hash = argon2.hash_password(pin.as_bytes(), &salt)?;
        Ok(pin_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: Some("employee:alice".parse().unwrap()),
            store: "store_1".to_string(),
            name: "Alice".to_string(),
            role: Role::Admin,
            pin_hash: Employee::hash_pin("1234").unwrap(),
            is_active: true,
            email: None,
            metadata: None,
        }
    }

    #[test]
    fn test_pin_hash_roundtrip() {
        let employee = sample_employee();
        assert!(employee.verify_pin("1234").unwrap());
        assert!(!employee.verify_pin("4321").unwrap());
    }

    #[test]
    fn test_serialization_omits_pin_hash() {
        let employee = sample_employee();
        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("pin_hash").is_none());
        assert_eq!(json["role"], "ADMIN");
        assert_eq!(json["id"], "employee:alice");
    }

    #[test]
    fn test_public_info_shape() {
        let employee = sample_employee();
        let json = serde_json::to_value(employee.public_info()).unwrap();
        assert_eq!(json["id"], "employee:alice");
        assert_eq!(json["name"], "Alice");
        assert!(json.get("pin_hash").is_none());
        assert!(json.get("store").is_none());
    }
}
