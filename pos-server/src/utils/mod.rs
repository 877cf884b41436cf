//! Utility functions

pub mod logger;
pub mod respond;

pub use respond::ok;
