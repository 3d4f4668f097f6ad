//! `careerhub-cli`: recruiter commands for the CareerHub careers page API.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use careerhub_core::error::ErrorKind;

mod commands;
mod context;
mod output;

use commands::Cli;

/// Log filter variable; logs stay quiet (`warn`) unless it is set.
const LOG_ENV: &str = "CAREERHUB_LOG";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        output::print_error(&e.to_string());
        match e.kind {
            ErrorKind::Network => output::print_warning("Is api.base_url reachable? See `careerhub-cli config show`"),
            ErrorKind::Configuration => output::print_warning("Check the file passed with --config"),
            _ => {}
        }
        std::process::exit(1);
    }
}
