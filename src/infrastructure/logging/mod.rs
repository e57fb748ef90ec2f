//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON formatting
//! - `RUST_LOG` directives on top of a configured default level

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::init_logging;
