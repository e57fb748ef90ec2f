//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::models::Environment;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LogFormat};

/// Top-level arguments
#[derive(Parser, Debug)]
#[command(name = "srs")]
#[command(about = "SRS - environment configuration tooling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Environment whose config file is used (dev, prod, test)
    #[arg(short, long, global = true, env = "SRS_ENV", default_value = "dev")]
    pub env: Environment,

    /// Read this file instead of resolving one from the environment
    #[arg(short, long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Default log level, overridden by RUST_LOG directives
    #[arg(long, global = true, env = "SRS_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Logger settings from the log flags
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    /// Loader for the selected file, `$SRS_ROOT` based unless `--config-file` is set
    pub fn loader(&self) -> ConfigLoader {
        self.config_file
            .as_ref()
            .map_or_else(ConfigLoader::from_env, ConfigLoader::for_file)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the environment configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the parameters handed to the JWT middleware
    Jwt,
}

/// `srs config` subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the loaded configuration (JWT key redacted)
    Show,

    /// Print the file the environment resolves to
    Path,

    /// Print the connection string with the database name appended
    ConnectionString,

    /// Load the configuration and report whether it is usable
    Check,
}
