use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::process;

use simple_bank_cli::cli::Session;
use simple_bank_cli::config;

/// Simple Banking Application - create accounts, deposit, withdraw and check balances
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Sets the configuration file
    #[clap(short, long, value_name = "FILE", default_value = "config.toml")]
    config: String,

    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr and stay quiet unless asked for, so they never
    // interleave with the menu
    let default_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(err) = config::load_config(&cli.config) {
        error!("Failed to load configuration: {:#}", err);
        process::exit(1);
    }
    let config = config::get_config();
    info!("Starting {} v{}", config.app_name, config.version);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), &config.display.currency_symbol);

    if let Err(err) = session.run() {
        error!("Console error: {:#}", err);
        process::exit(1);
    }
}
