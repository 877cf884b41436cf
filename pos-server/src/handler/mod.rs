//! Request Handlers
//!
//! Every handler follows the same shape: authorization via extractor,
//! explicit input validation, one or a few repository calls, JSON envelope.

pub mod auth;
pub mod category;
pub mod customer;
pub mod employee;
pub mod menu_item;
pub mod modifier;
pub mod modifier_group;
pub mod order;
pub mod report;
pub mod store_profile;
