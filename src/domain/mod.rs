//! Domain layer for the SRS configuration
//!
//! Environment selection, the configuration record and the parameters
//! derived from it for the JWT middleware.

pub mod error;
pub mod models;

// Re-export error types for convenient access
pub use error::{ConfigError, ConfigUnavailableCause};
