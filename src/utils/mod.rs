//! Shared utilities
//!
//! Error handling and input coercion used by the controllers.

pub mod errors;
pub mod validation;
