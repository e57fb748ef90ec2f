use clap::Parser;
use srs::cli::{Cli, Commands, ConfigCommands};
use srs::infrastructure::logging::LogFormat;
use srs::Environment;
use std::path::PathBuf;

#[test]
fn test_parse_config_show_defaults() {
    temp_env::with_vars_unset(["SRS_ENV", "SRS_LOG"], || {
        let cli = Cli::try_parse_from(["srs", "config", "show"]).unwrap();

        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Show)));
        assert_eq!(cli.env, Environment::Dev);
        assert!(cli.config_file.is_none());
        assert!(!cli.json);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.log_format, LogFormat::Pretty);
    });
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "srs",
        "config",
        "connection-string",
        "--env",
        "prod",
        "--json",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Config(ConfigCommands::ConnectionString)
    ));
    assert_eq!(cli.env, Environment::Prod);
    assert!(cli.json);
    assert_eq!(cli.log_format, LogFormat::Json);
}

#[test]
fn test_parse_environment_from_env_var() {
    temp_env::with_var("SRS_ENV", Some("test"), || {
        let cli = Cli::try_parse_from(["srs", "jwt"]).unwrap();
        assert!(matches!(cli.command, Commands::Jwt));
        assert_eq!(cli.env, Environment::Test);
    });
}

#[test]
fn test_unknown_environment_is_rejected() {
    let result = Cli::try_parse_from(["srs", "--env", "staging", "config", "check"]);
    assert!(result.is_err());
}

#[test]
fn test_config_file_pins_path() {
    let cli = Cli::try_parse_from([
        "srs",
        "--config-file",
        "/etc/srs/custom.yml",
        "-e",
        "test",
        "config",
        "path",
    ])
    .unwrap();

    assert_eq!(cli.config_file, Some(PathBuf::from("/etc/srs/custom.yml")));
    assert_eq!(
        cli.loader().config_path(Environment::Test),
        PathBuf::from("/etc/srs/custom.yml")
    );
}

#[test]
fn test_log_config_from_flags() {
    let cli = Cli::try_parse_from(["srs", "--log-level", "debug", "config", "check"]).unwrap();
    let log_config = cli.log_config();
    assert_eq!(log_config.level, "debug");
    assert_eq!(log_config.format, LogFormat::Pretty);
}
