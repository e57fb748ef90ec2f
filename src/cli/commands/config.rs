//! Implementation of the `srs config` commands.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::output::{key_value_table, output, CommandOutput};
use crate::cli::types::ConfigCommands;
use crate::domain::models::{Config, Environment};
use crate::infrastructure::config::ConfigCache;

/// Output of `srs config show`
#[derive(Debug, serde::Serialize)]
pub struct ConfigShowOutput {
    /// Selected environment
    pub environment: Environment,
    /// File the config was read from
    pub path: PathBuf,
    /// Loaded config with the JWT key redacted
    pub config: Config,
}

impl CommandOutput for ConfigShowOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let table = key_value_table([
            ("connection_string", config.connection_string.clone()),
            ("database", config.database.clone()),
            ("debug", config.debug.to_string()),
            ("environment", config.environment.to_string()),
            ("JWT_key", config.jwt_key.clone()),
            ("migrations_path", config.migrations_path.clone()),
        ]);
        format!("Config for `{}` ({})\n{table}", self.environment, self.path.display())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Output of `srs config path`
#[derive(Debug, serde::Serialize)]
pub struct ConfigPathOutput {
    /// Selected environment
    pub environment: Environment,
    /// Resolved config file
    pub path: PathBuf,
    /// Whether the file is present
    pub exists: bool,
}

impl CommandOutput for ConfigPathOutput {
    fn to_human(&self) -> String {
        if self.exists {
            self.path.display().to_string()
        } else {
            format!("{} (missing)", self.path.display())
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Output of `srs config connection-string`
#[derive(Debug, serde::Serialize)]
pub struct ConnectionStringOutput {
    /// Selected environment
    pub environment: Environment,
    /// Connection string with the database name appended
    pub connection_string: String,
}

impl CommandOutput for ConnectionStringOutput {
    fn to_human(&self) -> String {
        self.connection_string.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Output of `srs config check`
#[derive(Debug, serde::Serialize)]
pub struct ConfigCheckOutput {
    /// Whether the config loaded
    pub success: bool,
    /// Summary line
    pub message: String,
    /// Selected environment
    pub environment: Environment,
    /// File the config was read from
    pub path: PathBuf,
}

impl CommandOutput for ConfigCheckOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run an `srs config` subcommand
pub fn execute(command: ConfigCommands, cache: &ConfigCache, json_mode: bool) -> Result<()> {
    let environment = cache.environment();
    let path = cache.loader().config_path(environment);

    match command {
        ConfigCommands::Show => {
            let config = cache.get()?;
            let output_data = ConfigShowOutput {
                environment,
                path,
                config: config.redacted(),
            };
            output(&output_data, json_mode);
        }
        ConfigCommands::Path => {
            let output_data = ConfigPathOutput {
                environment,
                exists: path.is_file(),
                path,
            };
            output(&output_data, json_mode);
        }
        ConfigCommands::ConnectionString => {
            let config = cache.get()?;
            let output_data = ConnectionStringOutput {
                environment,
                connection_string: config.complete_connection_string(),
            };
            output(&output_data, json_mode);
        }
        ConfigCommands::Check => {
            cache.get()?;
            let output_data = ConfigCheckOutput {
                success: true,
                message: format!("Config for `{environment}` is valid."),
                environment,
                path,
            };
            output(&output_data, json_mode);
        }
    }

    Ok(())
}
