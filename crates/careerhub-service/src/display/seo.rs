//! Page metadata, sitemap and robots rules for the public site.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use careerhub_core::config::SiteConfig;
use careerhub_entity::company::Company;

use super::structured_data::non_blank;
use crate::company::resolve_asset_url;

const STATIC_ROUTES: [&str; 6] = ["", "/login", "/register", "/dashboard", "/jobs/new", "/create-company"];

const DISALLOWED: [&str; 8] = [
    "/api/",
    "/dashboard",
    "/jobs/new",
    "/jobs/*/edit",
    "/auth",
    "/login",
    "/register",
    "/create-company",
];

/// Head metadata for a published careers page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    /// Banner image, or the site-wide default.
    pub og_image: String,
}

/// Build head metadata for `company`'s careers page.
pub fn page_metadata(company: &Company, site: &SiteConfig, asset_base_url: &str) -> PageMetadata {
    let description = non_blank(company.description.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "Explore career opportunities at {}. Join us and build the future together.",
                company.name
            )
        });

    let og_image = company
        .banner_url
        .as_ref()
        .filter(|a| !a.is_empty())
        .map(|a| resolve_asset_url(asset_base_url, &a.url))
        .unwrap_or_else(|| site.url_for("/og-default.jpg"));

    PageMetadata {
        title: format!("{} Careers | Join Our Team", company.name),
        description,
        keywords: [company.name.as_str(), "careers", "jobs", "hiring", "recruitment", company.slug.as_str()]
            .into_iter()
            .map(String::from)
            .collect(),
        canonical_url: site.url_for(&company.slug),
        og_image,
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
}

/// Static routes followed by each company's careers page.
///
/// Companies without an `updated_at` use `now`.
pub fn sitemap_entries(site: &SiteConfig, companies: &[Company], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = site.url_for("");
    let statics = STATIC_ROUTES.iter().map(|route| SitemapEntry {
        url: format!("{base}{route}"),
        last_modified: now,
    });
    let careers = companies.iter().map(|company| SitemapEntry {
        url: format!("{base}/{}/careers", company.slug),
        last_modified: company.updated_at.unwrap_or(now),
    });
    statics.chain(careers).collect()
}

/// Render the sitemap as XML.
pub fn sitemap(site: &SiteConfig, companies: &[Company], now: DateTime<Utc>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in sitemap_entries(site, companies, now) {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Render `robots.txt`.
pub fn robots(site: &SiteConfig) -> String {
    let base = site.url_for("");
    let mut out = String::from("User-Agent: *\nAllow: /\n");
    for path in DISALLOWED {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push_str(&format!("\nHost: {base}\nSitemap: {base}/sitemap.xml\n"));
    out
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
