use anyhow::Context;
use clap::Parser;
use staffroll::application::Shell;
use staffroll::cli::Cli;
use staffroll::error::StaffrollError;
use staffroll::infrastructure::Config;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {:#}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so stdout carries only the menu transcript
fn init_tracing() -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("staffroll=warn").context("invalid default log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}

fn run(cli: Cli) -> Result<(), StaffrollError> {
    let config = Config::resolve(cli.config.as_deref(), cli.export)?;
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut shell = Shell::new(config, stdin.lock(), io::stdout());
    shell.run()
}
