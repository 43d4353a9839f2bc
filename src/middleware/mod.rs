//! HTTP middleware
//!
//! CORS and request logging.

pub mod cors;
pub mod request_log;

pub use cors::*;
pub use request_log::*;
