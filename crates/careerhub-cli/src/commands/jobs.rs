//! Job posting commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use careerhub_core::error::AppError;
use careerhub_core::types::id::{CompanyId, JobId};
use careerhub_core::types::{Choice, JobSort};
use careerhub_entity::job::{
    CreateJob, EMPLOYMENT_TYPES, EXPERIENCE_LEVELS, JOB_TYPES, Job, SalaryFrequency, SalaryType, WorkPolicy,
};
use careerhub_service::display::{find_currency, format_salary, plain_text};
use careerhub_service::{JobListing, JobManager, JobQueryService, ListingView};

use crate::context::CliContext;
use crate::output::{self, OutputFormat};

/// Arguments for job commands
#[derive(Debug, Args)]
pub struct JobsArgs {
    /// Jobs subcommand
    #[command(subcommand)]
    pub command: JobsCommand,
}

/// Job subcommands
#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List your company's jobs
    List(ListArgs),
    /// Post a new job
    Create(Box<CreateArgs>),
    /// Show one job
    Show {
        /// Job ID
        id: String,
    },
    /// Close a job (it cannot be reopened)
    Close {
        /// Job ID
        id: String,
    },
    /// Permanently delete a job
    Delete {
        /// Job ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Filters for `jobs list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Search title, department or location
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// remote, hybrid, onsite or all
    #[arg(long, default_value = "all")]
    pub policy: String,
    /// Location or all
    #[arg(long, default_value = "all")]
    pub location: String,
    /// confidential, range, fixed or all
    #[arg(long, default_value = "all")]
    pub salary: String,
    /// open, closed or all
    #[arg(long, default_value = "all")]
    pub status: String,
    /// newest, oldest, highest or lowest
    #[arg(long, default_value = "newest")]
    pub sort: JobSort,
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
}

/// Fields for `jobs create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Job title
    #[arg(short, long)]
    pub title: String,
    /// Description (HTML allowed)
    #[arg(short, long)]
    pub description: String,
    /// Office location
    #[arg(long)]
    pub location: Option<String>,
    /// remote, hybrid or onsite
    #[arg(long, default_value = "onsite")]
    pub policy: WorkPolicy,
    /// Department
    #[arg(long, default_value = "")]
    pub department: String,
    /// Full-time, Part-time, Contract or Internship
    #[arg(long, default_value = EMPLOYMENT_TYPES[0])]
    pub employment_type: String,
    /// Entry-level, Mid-level, Senior or Lead
    #[arg(long, default_value = EXPERIENCE_LEVELS[0])]
    pub experience_level: String,
    /// Permanent or Temporary
    #[arg(long, default_value = JOB_TYPES[0])]
    pub job_type: String,
    /// confidential, range or fixed
    #[arg(long, default_value = "confidential")]
    pub salary_type: SalaryType,
    /// Range minimum
    #[arg(long)]
    pub min_salary: Option<f64>,
    /// Range maximum
    #[arg(long)]
    pub max_salary: Option<f64>,
    /// Fixed amount
    #[arg(long)]
    pub fixed_salary: Option<f64>,
    /// ISO currency code
    #[arg(long)]
    pub currency: Option<String>,
    /// monthly or yearly
    #[arg(long)]
    pub frequency: Option<SalaryFrequency>,
}

/// Job display row
#[derive(Debug, Serialize, Tabled)]
struct JobRow {
    /// Job ID
    id: String,
    /// Title
    title: String,
    /// Location
    location: String,
    /// Policy
    policy: String,
    /// Salary
    salary: String,
    /// Status
    status: String,
}

impl JobRow {
    fn new(job: &Job, currency: &str) -> Self {
        Self {
            id: job.id.to_string(),
            title: job.title.clone(),
            location: job.location_label(),
            policy: job.work_policy.to_string(),
            salary: format_salary(job, currency),
            status: job.status.to_string(),
        }
    }
}

/// Execute job commands
pub async fn execute(args: &JobsArgs, ctx: &CliContext, format: OutputFormat) -> Result<(), AppError> {
    ctx.require_route("/jobs")?;
    let company_id = ctx.sessions.current().require_company()?.company_id.clone();
    let client = ctx.client()?;
    let manager = JobManager::new(client.clone());
    let currency = ctx.config.query.default_currency.as_str();

    match &args.command {
        JobsCommand::List(list) => {
            let mut listing = JobListing::manage(Some(company_id.clone()), &ctx.config.query);
            apply_filters(&mut listing, list)?;

            JobQueryService::new(client).refresh(&mut listing).await;
            if let Some(e) = &listing.last_error {
                output::print_warning(&format!("Could not load jobs: {e}"));
            }

            let rows: Vec<JobRow> = listing.jobs.iter().map(|j| JobRow::new(j, currency)).collect();
            let empty = ListingView::Empty.message().unwrap_or_default();
            output::print_list(&rows, format, empty);
            if format == OutputFormat::Table {
                let nav = listing.nav();
                println!(
                    "\n{}  ({} matching, {} open, {} closed)",
                    nav.label(),
                    listing.total_count,
                    listing.open_jobs,
                    listing.closed_jobs
                );
            }
        }
        JobsCommand::Create(create) => {
            if let Some(code) = &create.currency {
                find_currency(code).ok_or_else(|| AppError::validation(format!("Unknown currency '{code}'")))?;
            }
            let job = manager.create(&company_id, to_create_job(create)).await?;
            output::print_success(&format!("Posted '{}' (id: {})", job.title, job.id));
        }
        JobsCommand::Show { id } => {
            let job = manager.find_owned(&JobId::new(id.as_str()), &company_id).await?;
            match format {
                OutputFormat::Json => output::print_json(&job),
                OutputFormat::Table => show(&job, currency),
            }
        }
        JobsCommand::Close { id } => {
            let mut job = owned(&manager, id, &company_id).await?;
            manager.close(&mut job).await?;
            output::print_success(&format!("Closed '{}'", job.title));
        }
        JobsCommand::Delete { id, yes } => {
            let job = owned(&manager, id, &company_id).await?;
            if !super::confirm(*yes, &format!("Delete '{}' permanently?", job.title))? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            manager.delete(&job.id).await?;
            output::print_success(&format!("Deleted '{}'", job.title));
        }
    }

    Ok(())
}

async fn owned<A: careerhub_client::JobsApi>(
    manager: &JobManager<A>,
    id: &str,
    company_id: &CompanyId,
) -> Result<Job, AppError> {
    manager.find_owned(&JobId::new(id), company_id).await
}

fn apply_filters(listing: &mut JobListing, args: &ListArgs) -> Result<(), AppError> {
    listing.set_search(args.search.as_str());
    listing.set_work_policy(Choice::parse(&args.policy)?);
    listing.set_location(Choice::parse(&args.location).unwrap_or_default());
    listing.set_salary_type(Choice::parse(&args.salary)?);
    listing.set_status(Choice::parse(&args.status)?);
    listing.set_sort(args.sort);
    listing.filters.page = args.page.max(1);
    Ok(())
}

fn to_create_job(args: &CreateArgs) -> CreateJob {
    let mut job = CreateJob::new(args.title.as_str(), args.description.as_str());
    job.location = args.location.clone();
    job.work_policy = args.policy;
    job.department = args.department.clone();
    job.employment_type = args.employment_type.clone();
    job.experience_level = args.experience_level.clone();
    job.job_type = args.job_type.clone();
    job.salary_type = args.salary_type;
    job.min_salary = args.min_salary;
    job.max_salary = args.max_salary;
    job.salary_fixed = args.fixed_salary;
    job.currency = args.currency.as_ref().map(|c| c.trim().to_uppercase());
    job.salary_frequency = args.frequency;
    job
}

fn show(job: &Job, currency: &str) {
    output::print_heading(&job.title);
    output::print_kv("ID", job.id.as_str());
    output::print_kv("Status", &job.status.to_string());
    output::print_kv("Location", &job.location_label());
    output::print_kv("Work policy", &job.work_policy.to_string());
    output::print_kv("Department", &job.department);
    output::print_kv("Employment", &job.employment_type);
    output::print_kv("Experience", &job.experience_level);
    output::print_kv("Job type", &job.job_type);
    output::print_kv("Salary", &format_salary(job, currency));
    if let Some(posted) = job.posted_at {
        output::print_kv("Posted", &posted.format("%Y-%m-%d").to_string());
    }
    println!("\n{}", plain_text(&job.description));
}
