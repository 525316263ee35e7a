//! booruswitch - Main entry point

use clap::Parser;
use log::{debug, info};

use booruswitch::{run_account_command, run_status_command, run_switch_command, Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting booruswitch v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: host={}, quiet={}", cli.host, cli.quiet);

    let result = match &cli.command {
        Command::Account(action) => run_account_command(&cli.host, action),
        Command::Switch(args) => run_switch_command(&cli.host, args, cli.quiet).await,
        Command::Status => run_status_command(&cli.host, cli.quiet).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}
