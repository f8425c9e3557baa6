mod cli;
mod commands;
mod config;
mod error;
mod inventory;
mod output;
mod template;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{
    handle_component_command,
    handle_server_command,
    handle_template_command,
};
use config::Settings;
use error::Result;
use inventory::HttpInventoryClient;
use output::print_error;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?
        .with_overrides(cli.url.as_deref(), cli.token.as_deref());
    settings.validate()?;

    let client = HttpInventoryClient::new(&settings)?;

    match &cli.command {
        Commands::Template(cmd) => handle_template_command(cmd, &client, &settings),
        Commands::Server(cmd) => handle_server_command(cmd, &client),
        Commands::Component(cmd) => handle_component_command(cmd, &client),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
