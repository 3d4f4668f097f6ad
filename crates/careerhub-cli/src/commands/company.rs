//! Company profile and careers page commands.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use careerhub_client::{FileUpload, FilesApi};
use careerhub_core::error::AppError;
use careerhub_entity::company::{Company, CreateCompany, ThemeField};
use careerhub_entity::user::CompanySummary;
use careerhub_service::company::resolve_asset_url;
use careerhub_service::{CompanyBuilder, CompanyService, PublishToggle, ToggleOutcome};

use crate::context::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for company commands
#[derive(Debug, Args)]
pub struct CompanyArgs {
    /// Company subcommand
    #[command(subcommand)]
    pub command: CompanyCommand,
}

/// Company subcommands
#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// Create your company
    Create {
        /// Company name
        #[arg(short, long)]
        name: Option<String>,
        /// Company website (http:// or https://)
        #[arg(short, long)]
        website: Option<String>,
        /// Short description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show your company and its careers page settings
    Show,
    /// Publish or unpublish the careers page
    Publish,
    /// Set one theme color
    Theme {
        /// Which color
        #[arg(value_enum)]
        field: ThemeArg,
        /// Hex value, e.g. #10b981
        value: String,
    },
    /// Upload and attach a logo
    UploadLogo {
        /// Image file
        file: PathBuf,
    },
    /// Upload and attach a banner
    UploadBanner {
        /// Image file
        file: PathBuf,
    },
}

/// Theme color selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Primary,
    Secondary,
    Text,
    Background,
}

impl From<ThemeArg> for ThemeField {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Primary => Self::Primary,
            ThemeArg::Secondary => Self::Secondary,
            ThemeArg::Text => Self::Text,
            ThemeArg::Background => Self::Background,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AssetSlot {
    Logo,
    Banner,
}

/// Theme display row
#[derive(Debug, Serialize, Tabled)]
struct ColorRow {
    /// Field
    field: String,
    /// Value
    value: String,
}

/// Execute company commands
pub async fn execute(args: &CompanyArgs, ctx: &mut CliContext, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        CompanyCommand::Create {
            name,
            website,
            description,
        } => {
            ctx.require_route("/create-company")?;
            let form = CreateCompany {
                name: super::prompt_text(name, "Company name")?,
                website: super::prompt_text(website, "Website")?,
                description: description.clone(),
            };
            let service = CompanyService::new(ctx.client()?);
            let company = service.create(form).await?;
            ctx.sessions.set_company(CompanySummary::from(&company)).await?;

            output::print_success(&format!("Company '{}' created", company.name));
            output::print_kv("Slug", &company.slug);
            output::print_kv("Careers page", &ctx.config.site.url_for(&format!("{}/careers", company.slug)));
            output::print_warning("The page is a draft until you run `careerhub-cli company publish`");
        }
        CompanyCommand::Show => {
            let company = ctx.own_company().await?;
            show(ctx, &company, format);
        }
        CompanyCommand::Publish => {
            let mut company = ctx.own_company().await?;
            let toggle = PublishToggle::new(ctx.client()?);
            match toggle.toggle_in_place(&mut company).await? {
                ToggleOutcome::Changed(state) if state.is_public() => {
                    output::print_success(&format!(
                        "Published: {}",
                        ctx.config.site.url_for(&format!("{}/careers", company.slug))
                    ));
                }
                ToggleOutcome::Changed(_) => output::print_success("Careers page is now a draft"),
                ToggleOutcome::Ignored => output::print_warning("A publish request is already pending"),
            }
        }
        CompanyCommand::Theme { field, value } => {
            let mut company = ctx.own_company().await?;
            let mut builder = CompanyBuilder::new(company.clone());
            let field = ThemeField::from(*field);
            builder.set_theme_color(field, value)?;

            let service = CompanyService::new(ctx.client()?);
            service.save(&mut company, builder.into_update()).await?;
            output::print_success(&format!("{field} set to {}", company.theme.get(field)));
        }
        CompanyCommand::UploadLogo { file } => upload(ctx, file, AssetSlot::Logo).await?,
        CompanyCommand::UploadBanner { file } => upload(ctx, file, AssetSlot::Banner).await?,
    }

    Ok(())
}

fn show(ctx: &CliContext, company: &Company, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(company);
        return;
    }

    let asset_base = &ctx.config.api.asset_base_url;
    let asset = |a: &Option<careerhub_entity::company::Asset>| {
        a.as_ref()
            .map(|a| resolve_asset_url(asset_base, &a.url))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "(none)".to_string())
    };

    output::print_heading(&company.name);
    output::print_kv("ID", company.id.as_str());
    output::print_kv("Slug", &company.slug);
    output::print_kv("Website", company.website.as_deref().unwrap_or("(none)"));
    output::print_kv("State", &company.published.to_string());
    output::print_kv("Logo", &asset(&company.logo_url));
    output::print_kv("Banner", &asset(&company.banner_url));
    output::print_kv("Sections", &company.sections.len().to_string());

    let rows: Vec<ColorRow> = [
        ThemeField::Primary,
        ThemeField::Secondary,
        ThemeField::Text,
        ThemeField::Background,
    ]
    .into_iter()
    .map(|field| ColorRow {
        field: field.to_string(),
        value: company.theme.get(field).to_string(),
    })
    .collect();
    output::print_heading("Theme");
    output::print_list(&rows, format, "");
    println!("\nNext action: {}", company.published.action_label());
}

async fn upload(ctx: &CliContext, file: &Path, slot: AssetSlot) -> Result<(), AppError> {
    let mut company = ctx.own_company().await?;
    let data = tokio::fs::read(file)
        .await
        .map_err(|e| AppError::not_found(format!("Cannot read '{}': {e}", file.display())))?;

    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    let mime_type = mime_guess::from_path(file).first_or_octet_stream().to_string();
    if !mime_type.starts_with("image/") {
        return Err(AppError::validation(format!(
            "'{file_name}' is not an image ({mime_type})"
        )));
    }

    let client = ctx.client()?;
    let mut builder = CompanyBuilder::new(company.clone());
    let folder = builder.upload_folder();
    let uploaded = client
        .upload(
            FileUpload {
                file_name: file_name.clone(),
                mime_type,
                data: Bytes::from(data),
            },
            Some(folder.as_str()),
        )
        .await?;

    match slot {
        AssetSlot::Logo => builder.attach_logo(uploaded),
        AssetSlot::Banner => builder.attach_banner(uploaded),
    }
    CompanyService::new(client)
        .save(&mut company, builder.into_update())
        .await?;

    output::print_success(&format!("Uploaded '{file_name}' to {folder}/"));
    Ok(())
}
