//! schema.org JSON-LD for careers pages.

use serde_json::{Map, Value, json};

use careerhub_core::config::SiteConfig;
use careerhub_entity::company::Company;
use careerhub_entity::job::Job;

use super::salary::{DEFAULT_CURRENCY, currency_code};
use crate::company::resolve_asset_url;

/// `Organization` with one `JobPosting` per job.
///
/// `baseSalary` is left out for confidential salaries.
pub fn job_postings_ld(company: &Company, jobs: &[Job], page_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": company.name,
        "url": page_url,
        "jobPosting": jobs.iter().map(job_posting).collect::<Vec<_>>(),
    })
}

fn job_posting(job: &Job) -> Value {
    let mut posting = Map::new();
    posting.insert("@type".into(), json!("JobPosting"));
    posting.insert("title".into(), json!(job.title));
    posting.insert("description".into(), json!(job.description));
    posting.insert("employmentType".into(), json!(job.employment_type));
    if let Some(posted) = job.posted_at {
        posting.insert("datePosted".into(), json!(posted.to_rfc3339()));
    }
    posting.insert(
        "jobLocation".into(),
        json!({
            "@type": "Place",
            "address": {
                "@type": "PostalAddress",
                "addressLocality": job.location_label(),
            },
        }),
    );

    if let Some((min, max)) = job.salary().ok().and_then(|s| s.bounds()) {
        posting.insert(
            "baseSalary".into(),
            json!({
                "@type": "MonetaryAmount",
                "currency": currency_code(job.currency.as_deref(), DEFAULT_CURRENCY),
                "value": {
                    "@type": "QuantitativeValue",
                    "minValue": min,
                    "maxValue": max,
                },
            }),
        );
    }
    Value::Object(posting)
}

/// `Organization` describing the company itself.
pub fn organization_ld(company: &Company, site: &SiteConfig, asset_base_url: &str) -> Value {
    let logo = company
        .logo_url
        .as_ref()
        .filter(|a| !a.is_empty())
        .map(|a| resolve_asset_url(asset_base_url, &a.url))
        .unwrap_or_else(|| site.url_for("/logo.png"));

    let description = non_blank(company.description.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Explore exciting career opportunities at {}.", company.name));

    let same_as = non_blank(company.website.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| site.url_for(""));

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": company.name,
        "url": site.url_for(&company.slug),
        "logo": logo,
        "description": description,
        "sameAs": [same_as],
    })
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
