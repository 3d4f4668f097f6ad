//! CLI command definitions and dispatch.

pub mod auth;
pub mod company;
pub mod config;
pub mod jobs;
pub mod sections;
pub mod site;

use clap::{Parser, Subcommand};

use careerhub_core::config::AppConfig;
use careerhub_core::error::AppError;

use crate::context::CliContext;
use crate::output::OutputFormat;

/// CareerHub careers page builder for recruiters
#[derive(Debug, Parser)]
#[command(name = "careerhub-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Account and session
    Auth(auth::AuthArgs),
    /// Company profile and careers page
    Company(company::CompanyArgs),
    /// Careers page content sections
    Sections(sections::SectionsArgs),
    /// Job postings
    Jobs(jobs::JobsArgs),
    /// Sitemap, robots and page metadata
    Site(site::SiteArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, self.format);
        }

        let mut ctx = CliContext::open(&self.config).await?;
        match &self.command {
            Commands::Auth(args) => auth::execute(args, &mut ctx, self.format).await,
            Commands::Company(args) => company::execute(args, &mut ctx, self.format).await,
            Commands::Sections(args) => sections::execute(args, &ctx, self.format).await,
            Commands::Jobs(args) => jobs::execute(args, &ctx, self.format).await,
            Commands::Site(args) => site::execute(args, &ctx, self.format).await,
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: load configuration from file, the `CAREERHUB_ENV` overlay and
/// environment variables
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("CAREERHUB_ENV").ok();
    AppConfig::load_layered(config_path, env.as_deref())
}

/// Helper: prompt for a value when it was not given on the command line
pub fn prompt_text(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}

/// Helper: ask for confirmation unless `--yes` was passed
pub fn confirm(assume_yes: bool, prompt: &str) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
