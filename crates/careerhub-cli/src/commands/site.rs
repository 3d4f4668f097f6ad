//! Public site files: sitemap, robots and page metadata.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Subcommand};
use serde_json::json;

use careerhub_core::error::AppError;
use careerhub_service::display::{job_postings_ld, organization_ld, page_metadata, robots, sitemap};
use careerhub_service::{CompanyService, JobListing, JobQueryService, PublicPage};

use crate::context::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for site commands
#[derive(Debug, Args)]
pub struct SiteArgs {
    /// Site subcommand
    #[command(subcommand)]
    pub command: SiteCommand,
}

/// Site subcommands
#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// Generate sitemap.xml from the published companies
    Sitemap {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate robots.txt
    Robots {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Page metadata and JSON-LD for a published careers page
    Meta {
        /// Company slug
        slug: String,
    },
}

/// Execute site commands
pub async fn execute(args: &SiteArgs, ctx: &CliContext, _format: OutputFormat) -> Result<(), AppError> {
    let client = ctx.client()?;
    let site = &ctx.config.site;

    match &args.command {
        SiteCommand::Sitemap { output: out } => {
            let companies = CompanyService::new(client).list_published().await?;
            let xml = sitemap(site, &companies, Utc::now());
            write_or_print(out.as_ref(), &xml).await?;
        }
        SiteCommand::Robots { output: out } => {
            write_or_print(out.as_ref(), &robots(site)).await?;
        }
        SiteCommand::Meta { slug } => {
            let company = match CompanyService::new(client.clone()).public_page(slug).await? {
                PublicPage::Visible(company) => company,
                PublicPage::NotFound => {
                    return Err(AppError::not_found(format!("No published careers page for '{slug}'")));
                }
            };

            let mut listing = JobListing::public(Some(company.id.clone()), &ctx.config.query);
            JobQueryService::new(client).refresh(&mut listing).await;

            let asset_base = &ctx.config.api.asset_base_url;
            let page_url = site.url_for(&format!("{}/careers", company.slug));
            output::print_json(&json!({
                "metadata": page_metadata(&company, site, asset_base),
                "organization": organization_ld(&company, site, asset_base),
                "jobPostings": job_postings_ld(&company, &listing.jobs, &page_url),
            }));
        }
    }

    Ok(())
}

async fn write_or_print(path: Option<&PathBuf>, content: &str) -> Result<(), AppError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, content).await?;
            output::print_success(&format!("Wrote {}", path.display()));
        }
        None => print!("{content}"),
    }
    Ok(())
}
