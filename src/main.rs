mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardtint::config::{self, Config};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    init_logging(cli_opts.verbose);

    let config_path = cli_opts.config.unwrap_or_else(config::default_config_path);
    let config = Config::load(&config_path)?;
    cli::run(cli_opts.command, &config)
}

/// Logs go to stderr so rendered pages can be piped from stdout.
fn init_logging(verbose: bool) {
    let default = if verbose { "cardtint=debug" } else { "cardtint=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
