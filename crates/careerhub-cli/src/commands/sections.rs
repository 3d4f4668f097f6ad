//! Careers page section commands.
//!
//! Positions on the command line are 1-based, matching the `order` shown by
//! `sections list`. Every change is saved immediately.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use careerhub_core::error::AppError;
use careerhub_entity::company::SectionKind;
use careerhub_service::CompanyBuilder;
use careerhub_service::CompanyService;
use careerhub_service::display::plain_text;

use crate::context::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for section commands
#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Sections subcommand
    #[command(subcommand)]
    pub command: SectionsCommand,
}

/// Section subcommands
#[derive(Debug, Subcommand)]
pub enum SectionsCommand {
    /// List sections in display order
    List,
    /// Append a section (hero, about, life, perks, custom)
    Add {
        /// Section type
        kind: SectionKind,
    },
    /// Move a section to another position
    Move {
        /// Current position
        from: usize,
        /// New position
        to: usize,
    },
    /// Remove a section
    Remove {
        /// Position
        position: usize,
    },
    /// Save a section's title and content
    Save {
        /// Position
        position: usize,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New HTML content
        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read the HTML content from a file
        #[arg(long)]
        content_file: Option<std::path::PathBuf>,
    },
}

/// Section display row
#[derive(Debug, Serialize, Tabled)]
struct SectionRow {
    /// Order
    order: u32,
    /// Type
    kind: String,
    /// Title
    title: String,
    /// Content preview
    preview: String,
}

/// Execute section commands
pub async fn execute(args: &SectionsArgs, ctx: &CliContext, format: OutputFormat) -> Result<(), AppError> {
    let mut company = ctx.own_company().await?;
    let mut builder = CompanyBuilder::new(company.clone());

    let message = match &args.command {
        SectionsCommand::List => {
            let rows: Vec<SectionRow> = builder
                .sections()
                .sorted_for_display()
                .into_iter()
                .map(|s| SectionRow {
                    order: s.order,
                    kind: s.kind.to_string(),
                    title: s.title.clone(),
                    preview: preview(&s.content),
                })
                .collect();
            output::print_list(&rows, format, "No sections yet. Add one with `sections add <type>`.");
            return Ok(());
        }
        SectionsCommand::Add { kind } => {
            let added = builder.add_section(*kind)?;
            format!("Added '{}' at position {}", added.title, added.order)
        }
        SectionsCommand::Move { from, to } => {
            builder
                .sections_mut()
                .move_section(index(*from)?, index(*to)?)?;
            format!("Moved section {from} to position {to}")
        }
        SectionsCommand::Remove { position } => {
            let removed = builder.sections_mut().remove(index(*position)?)?;
            format!("Removed '{}'", removed.title)
        }
        SectionsCommand::Save {
            position,
            title,
            content,
            content_file,
        } => {
            let idx = index(*position)?;
            let current = builder
                .sections()
                .get(idx)
                .ok_or_else(|| AppError::not_found(format!("No section at position {position}")))?
                .clone();

            let content = match (content, content_file) {
                (Some(c), _) => c.clone(),
                (None, Some(path)) => tokio::fs::read_to_string(path).await?,
                (None, None) => current.content.clone(),
            };
            let title = title.clone().unwrap_or(current.title);
            builder.sections_mut().update(idx, title, content)?;
            format!("Saved section {position}")
        }
    };

    CompanyService::new(ctx.client()?)
        .save(&mut company, builder.into_update())
        .await?;
    output::print_success(&message);
    Ok(())
}

fn index(position: usize) -> Result<usize, AppError> {
    position
        .checked_sub(1)
        .ok_or_else(|| AppError::validation("Positions start at 1"))
}

fn preview(html: &str) -> String {
    let text = plain_text(html).replace('\n', " ");
    if text.chars().count() > 40 {
        let cut: String = text.chars().take(39).collect();
        format!("{cut}…")
    } else {
        text
    }
}
