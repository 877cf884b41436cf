//! Database Models
//!
//! Typed rows matching the SurrealDB tables, plus create/update payloads.

pub mod category;
pub mod customer;
pub mod employee;
pub mod menu_item;
pub mod modifier;
pub mod order;
pub mod serde_helpers;
pub mod store_profile;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeePublic, EmployeeUpdate, Role};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use modifier::{
    Modifier, ModifierCreate, ModifierGroup, ModifierGroupCreate, ModifierGroupUpdate,
    ModifierUpdate,
};
pub use order::{
    Order, OrderCreate, OrderItem, OrderItemModifier, OrderLineCreate, OrderStatus, OrderType,
};
pub use store_profile::{StoreProfile, StoreProfileUpsert};

/// Current timestamp in Unix milliseconds, the storage format for all
/// `created_at` fields
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
