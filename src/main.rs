//! SRS CLI entry point.

use clap::Parser;

use srs::cli::{Cli, Commands};
use srs::infrastructure::config::ConfigCache;
use srs::infrastructure::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(&cli.log_config()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    let cache = ConfigCache::new(cli.loader(), cli.env);

    let result = match cli.command {
        Commands::Config(command) => srs::cli::commands::config::execute(command, &cache, cli.json),
        Commands::Jwt => srs::cli::commands::jwt::execute(&cache, cli.json),
    };

    if let Err(err) = result {
        srs::cli::handle_error(err, cli.json);
    }
}
