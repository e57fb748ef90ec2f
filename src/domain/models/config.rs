//! Environment selection and the configuration record.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::domain::error::ConfigError;
use crate::domain::models::jwt::JwtConfig;

const REDACTED: &str = "[REDACTED]";

/// Environment the application runs in
///
/// Each environment maps to exactly one YAML file in the config directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (`dev.yml`)
    #[default]
    Dev,
    /// Production (`prod.yml`)
    Prod,
    /// Automated tests (`test.yml`)
    Test,
}

impl Environment {
    /// Every known environment, in declaration order
    pub const ALL: [Self; 3] = [Self::Dev, Self::Prod, Self::Test];

    /// Short name used on the command line and in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
            Self::Test => "test",
        }
    }

    /// File name of this environment's config, relative to the config directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Dev => "dev.yml",
            Self::Prod => "prod.yml",
            Self::Test => "test.yml",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Application configuration loaded from `<env>.yml`
///
/// Keys missing from the file keep their zero value, unknown keys are ignored.
/// `environment` is never read from the file: it is the environment the file
/// was selected for.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Connection string prefix, expected to end with its own delimiter
    #[serde(deserialize_with = "scalar_string")]
    pub connection_string: String,

    /// Database name appended to `connection_string`
    #[serde(deserialize_with = "scalar_string")]
    pub database: String,

    /// Debug mode flag
    #[serde(deserialize_with = "null_as_false")]
    pub debug: bool,

    /// Environment this config was loaded for
    #[serde(skip_deserializing)]
    pub environment: Environment,

    /// Secret used to sign and verify JWTs
    #[serde(rename = "JWT_key", deserialize_with = "scalar_string")]
    pub jwt_key: String,

    /// Location of the database migrations
    #[serde(deserialize_with = "scalar_string")]
    pub migrations_path: String,
}

/// Text of any scalar; a key without a value reads as empty
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "invalid type: expected a scalar, found {other:?}"
        ))),
    }
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Zero-valued config seeded with `environment`
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Parse a YAML document into a config for `environment`
    ///
    /// An empty document (or one holding only comments) yields the zero config.
    pub fn from_yaml_str(environment: Environment, yaml: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::for_environment(environment));
        }

        let mut config: Self = serde_yaml::from_value(value)?;
        config.environment = environment;
        Ok(config)
    }

    /// Connection string followed by the database name, without a separator
    pub fn complete_connection_string(&self) -> String {
        format!("{}{}", self.connection_string, self.database)
    }

    /// Parameters for the JWT middleware, signed with this config's key
    pub fn jwt_config<C>(&self, claims: C) -> JwtConfig<C> {
        JwtConfig::new(claims, self)
    }

    /// Copy of this config that is safe to print
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.jwt_key.is_empty() {
            copy.jwt_key = REDACTED.to_string();
        }
        copy
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jwt_key = if self.jwt_key.is_empty() { "" } else { REDACTED };
        f.debug_struct("Config")
            .field("connection_string", &self.connection_string)
            .field("database", &self.database)
            .field("debug", &self.debug)
            .field("environment", &self.environment)
            .field("jwt_key", &jwt_key)
            .field("migrations_path", &self.migrations_path)
            .finish()
    }
}
