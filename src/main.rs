//! CareerHub public careers page browser
//!
//! Resolves a company's published careers page and browses its open
//! positions from the terminal. Plain input lines are search keystrokes and
//! are debounced; `:` commands change filters and pages immediately.

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt};

use careerhub_auth::SessionStore;
use careerhub_client::ApiClient;
use careerhub_core::config::{AppConfig, LogFormat};
use careerhub_core::error::AppError;
use careerhub_core::types::{Choice, JobSort};
use careerhub_entity::company::Company;
use careerhub_service::display::{format_salary, plain_text};
use careerhub_service::{
    CompanyService, JobListing, JobQueryService, JobSearch, ListingView, PublicPage, Refetch,
    SearchEvent,
};

/// Browse a company's careers page
#[derive(Debug, Parser)]
#[command(name = "careerhub", version, about, long_about = None)]
struct Args {
    /// Company slug, as in /{slug}/careers
    slug: String,

    /// Path to configuration file
    #[arg(short, long, env = "CAREERHUB_CONFIG", default_value = "config/default.toml")]
    config: String,
}

const HELP: &str = "\
Type to search (an empty line clears the search). Commands:
  :policy <remote|hybrid|onsite|all>   :location <name|all>
  :sort <newest|oldest|highest|lowest>
  :next  :prev  :clear  :help  :quit";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match load_configuration(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(args, config).await {
        tracing::error!(error = %e, "careerhub failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file, the `CAREERHUB_ENV` overlay and environment
fn load_configuration(path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("CAREERHUB_ENV").ok();
    AppConfig::load_layered(path, env.as_deref())
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// What one line of input asks for.
enum Input {
    Change(Refetch),
    Help,
    Quit,
}

async fn run(args: Args, config: AppConfig) -> Result<(), AppError> {
    // send the stored session token when there is one
    let session = SessionStore::from_config(&config.session).load().await?;
    let client = Arc::new(ApiClient::new(&config.api, session.token().map(String::from))?);

    let company = match CompanyService::new(client.clone()).public_page(&args.slug).await? {
        PublicPage::Visible(company) => company,
        PublicPage::NotFound => {
            println!("404: no careers page at '{}'.", args.slug.trim());
            return Ok(());
        }
    };
    render_company(&company, &config);

    let mut listing = JobListing::public(Some(company.id.clone()), &config.query);
    let mut search = JobSearch::from_config(JobQueryService::new(client), &config.query);

    if search.start(&mut listing) {
        print_loading();
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match handle_line(&mut listing, &line) {
                    Input::Quit => break,
                    Input::Help => println!("{HELP}"),
                    Input::Change(refetch) => {
                        if search.refetch(&mut listing, refetch)? {
                            print_loading();
                        }
                    }
                }
            }
            Some(event) = search.next_event(&mut listing) => match event {
                SearchEvent::Started => print_loading(),
                SearchEvent::Applied => render_jobs(&listing, &config.query.default_currency),
                SearchEvent::Skipped | SearchEvent::Stale => {}
            },
        }
    }

    Ok(())
}

fn print_loading() {
    println!("{}", ListingView::Loading.message().unwrap_or_default());
}

fn handle_line(listing: &mut JobListing, line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Input::Change(listing.set_search(line));
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(n, a)| (n, a.trim()))
        .unwrap_or((command, ""));

    let refetch = match name {
        "q" | "quit" => return Input::Quit,
        "h" | "help" => return Input::Help,
        "next" => listing.next_page(),
        "prev" => listing.previous_page(),
        "clear" => listing.clear_filters(),
        "policy" => match Choice::parse(arg) {
            Ok(policy) => listing.set_work_policy(policy),
            Err(e) => return invalid(&e),
        },
        "location" => {
            if arg.is_empty() {
                println!("Locations: {}", listing.locations.join(", "));
                return Input::Change(Refetch::Skip);
            }
            listing.set_location(Choice::parse(arg).unwrap_or_default())
        }
        "sort" => match arg.parse::<JobSort>() {
            Ok(sort) => listing.set_sort(sort),
            Err(e) => return invalid(&e),
        },
        _ => {
            println!("Unknown command ':{name}'.");
            return Input::Help;
        }
    };
    Input::Change(refetch)
}

fn invalid(e: &AppError) -> Input {
    println!("{}", e.message);
    Input::Change(Refetch::Skip)
}

fn render_company(company: &Company, config: &AppConfig) {
    println!("{} Careers", company.name);
    println!("{}", "=".repeat(company.name.chars().count() + 8));
    if let Some(website) = company.website.as_deref().filter(|w| !w.trim().is_empty()) {
        println!("{website}");
    }
    if let Some(description) = company.description.as_deref() {
        println!("\n{}", plain_text(description));
    }

    for section in careerhub_service::SectionList::new(company.sections.clone()).sorted_for_display() {
        println!("\n## {}\n{}", section.title, plain_text(&section.content));
    }
    println!("\n{}\n", config.site.url_for(&format!("{}/careers", company.slug)));
}

fn render_jobs(listing: &JobListing, currency: &str) {
    match listing.view() {
        ListingView::Results(jobs) => {
            println!("\nOpen positions ({})", listing.total_count);
            for job in jobs {
                println!(
                    "  • {} | {} | {} | {}",
                    job.title,
                    job.location_label(),
                    job.work_policy,
                    format_salary(job, currency)
                );
            }
        }
        view => println!("\n{}", view.message().unwrap_or_default()),
    }

    let nav = listing.nav();
    let prev = if nav.has_previous { ":prev" } else { "     " };
    let next = if nav.has_next { ":next" } else { "     " };
    println!("{prev}  {}  {next}", nav.label());
}
