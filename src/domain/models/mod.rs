//! Domain models.

pub mod config;
pub mod jwt;

pub use config::{Config, Environment};
pub use jwt::{JwtConfig, JWT_CONTEXT_KEY, JWT_SIGNING_ALGORITHM};
