//! Parameters for the JWT authentication middleware.
//!
//! The middleware itself (token extraction, validation, rejection) lives
//! downstream. This module only hands it the claims shape, the signing key
//! and the request-context key under which the authenticated identity is
//! stored.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};

use super::config::Config;

/// Context key under which the middleware stores the authenticated user
pub const JWT_CONTEXT_KEY: &str = "user";

/// Signing method expected by the middleware
pub const JWT_SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Configuration consumed by the JWT middleware
#[derive(Clone)]
pub struct JwtConfig<C> {
    /// Claims value the middleware decodes tokens into, passed through as given
    pub claims: C,

    /// Raw HMAC secret, the bytes of the config's `JWT_key`
    pub signing_key: Vec<u8>,

    /// Where the authenticated identity is stored downstream
    pub context_key: &'static str,
}

impl<C> JwtConfig<C> {
    /// Build middleware parameters from `claims` and the loaded config
    pub fn new(claims: C, config: &Config) -> Self {
        Self {
            claims,
            signing_key: config.jwt_key.as_bytes().to_vec(),
            context_key: JWT_CONTEXT_KEY,
        }
    }

    /// HMAC key for signing tokens
    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.signing_key)
    }

    /// HMAC key for verifying tokens
    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.signing_key)
    }

    /// Validation rules matching [`JWT_SIGNING_ALGORITHM`]
    #[allow(clippy::unused_self)]
    pub fn validation(&self) -> Validation {
        Validation::new(JWT_SIGNING_ALGORITHM)
    }
}

impl<C: fmt::Debug> fmt::Debug for JwtConfig<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("claims", &self.claims)
            .field("signing_key", &format_args!("[{} bytes]", self.signing_key.len()))
            .field("context_key", &self.context_key)
            .finish()
    }
}
