//! Infrastructure layer module
//!
//! - Configuration loading and caching
//! - Logging infrastructure

pub mod config;
pub mod logging;
