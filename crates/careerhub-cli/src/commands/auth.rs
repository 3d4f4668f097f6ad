//! Account and session commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use careerhub_core::error::AppError;
use careerhub_entity::user::{Credentials, Registration};

use crate::context::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Create an account and sign in
    Register {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign in
    Login {
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Debug, Serialize)]
struct WhoAmI<'a> {
    user_id: &'a str,
    name: &'a str,
    email: &'a str,
    company: Option<&'a str>,
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, ctx: &mut CliContext, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        AuthCommand::Register {
            name,
            email,
            password,
        } => {
            let name = super::prompt_text(name, "Full name")?;
            let email = super::prompt_text(email, "Email")?;
            let (password, confirm_password) = match password {
                Some(p) => (p.clone(), p.clone()),
                None => {
                    let password: String = dialoguer::Password::new()
                        .with_prompt("Password")
                        .interact()
                        .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                    let confirm: String = dialoguer::Password::new()
                        .with_prompt("Confirm password")
                        .interact()
                        .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                    (password, confirm)
                }
            };

            let session = ctx
                .sessions
                .register(Registration {
                    name,
                    email,
                    password,
                    confirm_password,
                })
                .await?;
            let name = session.require_user()?.name.clone();
            output::print_success(&format!("Registered and signed in as {name}"));
            output::print_warning("Next: create your company with `careerhub-cli company create`");
        }
        AuthCommand::Login { email, password } => {
            let email = super::prompt_text(email, "Email")?;
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let session = ctx.sessions.login(Credentials { email, password }).await?;
            let user = session.require_user()?;
            output::print_success(&format!("Signed in as {} <{}>", user.name, user.email));
            if session.company.is_none() {
                output::print_warning("No company yet: run `careerhub-cli company create`");
            }
        }
        AuthCommand::Logout => {
            ctx.sessions.logout().await?;
            output::print_success("Signed out");
        }
        AuthCommand::Whoami => {
            let session = ctx.sessions.current();
            let user = session.require_user()?;
            let info = WhoAmI {
                user_id: user.user_id.as_str(),
                name: &user.name,
                email: &user.email,
                company: session.company.as_ref().map(|c| c.slug.as_str()),
            };
            match format {
                OutputFormat::Json => output::print_json(&info),
                OutputFormat::Table => {
                    output::print_kv("User", &format!("{} <{}>", info.name, info.email));
                    output::print_kv("User ID", info.user_id);
                    output::print_kv("Company", info.company.unwrap_or("(none)"));
                }
            }
        }
    }

    Ok(())
}
