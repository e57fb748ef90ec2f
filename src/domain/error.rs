//! Configuration errors.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::config::Environment;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config for `environment` could not be read or parsed
    #[error("Could not load config for environment `{environment}`")]
    Unavailable {
        /// Environment whose config was requested
        environment: Environment,
        /// Read or parse failure behind the error
        #[source]
        cause: ConfigUnavailableCause,
    },

    /// A name that is not `dev`, `prod` or `test`
    #[error("Unknown environment: {0}. Must be one of: dev, prod, test")]
    UnknownEnvironment(String),
}

impl ConfigError {
    /// Environment the failed load was for, if any
    pub const fn environment(&self) -> Option<Environment> {
        match self {
            Self::Unavailable { environment, .. } => Some(*environment),
            Self::UnknownEnvironment(_) => None,
        }
    }

    /// Underlying read or parse failure of an unavailable config
    pub const fn cause(&self) -> Option<&ConfigUnavailableCause> {
        match self {
            Self::Unavailable { cause, .. } => Some(cause),
            Self::UnknownEnvironment(_) => None,
        }
    }
}

/// Why a config file could not be turned into a [`Config`](super::models::Config)
#[derive(Error, Debug)]
pub enum ConfigUnavailableCause {
    /// The file could not be read
    #[error("Failed to read {}", .path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// I/O failure
        #[source]
        source: io::Error,
    },

    /// The file is not YAML matching the config layout
    #[error("Failed to parse {}", .path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// YAML failure
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigUnavailableCause {
    /// Whether the file could not be read
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Whether the file could not be parsed
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// File the failure refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_environment() {
        let err = ConfigError::Unavailable {
            environment: Environment::Prod,
            cause: ConfigUnavailableCause::Read {
                path: PathBuf::from("/srv/app/config/prod.yml"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
        };

        assert_eq!(err.to_string(), "Could not load config for environment `prod`");
        assert_eq!(err.environment(), Some(Environment::Prod));
        assert!(err.cause().is_some_and(ConfigUnavailableCause::is_read));
    }

    #[test]
    fn test_error_chain_reaches_io_error() {
        let err = ConfigError::Unavailable {
            environment: Environment::Dev,
            cause: ConfigUnavailableCause::Read {
                path: PathBuf::from("dev.yml"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        };

        let chain: Vec<String> = anyhow::Error::from(err).chain().map(ToString::to_string).collect();
        assert_eq!(
            chain,
            vec![
                "Could not load config for environment `dev`".to_string(),
                "Failed to read dev.yml".to_string(),
                "denied".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_environment_has_no_cause() {
        let err = ConfigError::UnknownEnvironment("qa".to_string());
        assert!(err.environment().is_none());
        assert!(err.cause().is_none());
        assert!(err.to_string().contains("qa"));
    }
}
