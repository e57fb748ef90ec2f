//! Command-line interface
//!
//! The CLI is the startup routine: it selects the environment, owns the
//! [`ConfigCache`](crate::infrastructure::config::ConfigCache) and decides
//! to exit when configuration is unavailable.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, ConfigCommands};

/// Render a failed command's error chain for stderr
pub fn error_report(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        format!("Error: {err:#}")
    }
}

/// Report a failed command and terminate the process
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("{}", error_report(&err, json_mode));
    std::process::exit(1);
}
