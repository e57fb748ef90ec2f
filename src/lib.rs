//! SRS - environment configuration
//!
//! Loads the YAML configuration for one of the `dev`, `prod` or `test`
//! environments and derives the parameters the JWT authentication
//! middleware needs from it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): `Environment`, `Config`, `JwtConfig` and errors
//! - **Infrastructure Layer** (`infrastructure`): file loading, caching, logging
//! - **CLI Layer** (`cli`): startup routine and inspection commands
//!
//! # Example
//!
//! ```no_run
//! use srs::{ConfigCache, ConfigLoader, Environment};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cache = ConfigCache::new(ConfigLoader::from_env(), Environment::Dev);
//!     let config = cache.get()?;
//!     println!("{}", config.complete_connection_string());
//!
//!     let jwt = cache.jwt_config(())?;
//!     assert_eq!(jwt.context_key, "user");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{Config, Environment, JwtConfig, JWT_CONTEXT_KEY, JWT_SIGNING_ALGORITHM};
pub use domain::{ConfigError, ConfigUnavailableCause};
pub use infrastructure::config::{ConfigCache, ConfigLoader};
