//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use careerhub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("api.base_url", &config.api.base_url);
                    output::print_kv("api.asset_base_url", &config.api.asset_base_url);
                    output::print_kv("api.timeout", &format!("{}s", config.api.request_timeout_seconds));
                    output::print_kv("query.debounce_ms", &config.query.debounce_ms.to_string());
                    output::print_kv("query.public_page", &config.query.public_page_size.to_string());
                    output::print_kv("query.manage_page", &config.query.manage_page_size.to_string());
                    output::print_kv("query.currency", &config.query.default_currency);
                    output::print_kv("session.path", &config.session.path);
                    output::print_kv("site.base_url", &config.site.base_url);
                    output::print_kv("logging.level", &config.logging.level);
                    output::print_kv("logging.format", &config.logging.format.to_string());
                }
            }
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                println!("  API: {}", config.api.base_url);
                println!("  Site: {}", config.site.base_url);
                println!("  Session file: {}", config.session.path);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
