//! Project configuration
//!
//! This module contains the environment-driven settings of the service.

pub mod environment;

pub use environment::*;
