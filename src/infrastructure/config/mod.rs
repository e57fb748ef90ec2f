//! Configuration management infrastructure
//!
//! - Environment to file path resolution
//! - YAML file loading
//! - Write-once config cache

pub mod cache;
pub mod loader;

pub use cache::ConfigCache;
pub use loader::{ConfigLoader, BASE_DIR_ENV, CONFIG_SUBPATH};
