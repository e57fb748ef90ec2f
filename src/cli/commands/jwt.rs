//! Implementation of the `srs jwt` command.

use anyhow::Result;
use jsonwebtoken::Algorithm;

use crate::cli::output::{key_value_table, output, CommandOutput};
use crate::domain::models::{Environment, JWT_SIGNING_ALGORITHM};
use crate::infrastructure::config::ConfigCache;

/// Output of `srs jwt`
#[derive(Debug, serde::Serialize)]
pub struct JwtOutput {
    /// Selected environment
    pub environment: Environment,
    /// Context key the middleware stores the user under
    pub context_key: &'static str,
    /// Expected signing method
    pub algorithm: Algorithm,
    /// Length of the signing key, never the key itself
    pub signing_key_bytes: usize,
}

impl CommandOutput for JwtOutput {
    fn to_human(&self) -> String {
        let mut text = key_value_table([
            ("context_key", self.context_key.to_string()),
            ("algorithm", format!("{:?}", self.algorithm)),
            ("signing_key", format!("{} bytes", self.signing_key_bytes)),
        ]);
        if self.signing_key_bytes == 0 {
            text.push_str(&format!(
                "\nWarning: no JWT_key configured for `{}`",
                self.environment
            ));
        }
        text
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `srs jwt`
pub fn execute(cache: &ConfigCache, json_mode: bool) -> Result<()> {
    // Claims are supplied per request by the middleware's caller
    let jwt = cache.jwt_config(())?;

    let output_data = JwtOutput {
        environment: cache.environment(),
        context_key: jwt.context_key,
        algorithm: JWT_SIGNING_ALGORITHM,
        signing_key_bytes: jwt.signing_key.len(),
    };
    output(&output_data, json_mode);
    Ok(())
}
