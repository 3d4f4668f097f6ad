//! Integration tests for the public careers page flow.

mod helpers;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use careerhub_core::types::Choice;
use careerhub_entity::job::WorkPolicy;
use careerhub_service::display::format_salary;
use careerhub_service::{CompanyService, JobListing, JobQueryService, ListingView, PublicPage};

use helpers::{TestApp, company_json, job_json, list_json};

#[tokio::test]
async fn test_published_page_lists_jobs_with_locations() {
    let app = TestApp::new().await;
    app.mount_company(company_json("acme", "u1", "PUBLISHED")).await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(
            vec![job_json("j1", "c-acme", "OPEN")],
            16,
            &["Pune", "Remote"],
        )))
        .mount(&app.server)
        .await;

    let client = app.client(None);
    let page = CompanyService::new(client.clone()).public_page("acme").await.unwrap();
    let PublicPage::Visible(company) = page else {
        panic!("expected a visible page");
    };

    let service = JobQueryService::new(client);
    let mut listing = JobListing::public(Some(company.id.clone()), &app.config.query);
    assert!(service.refresh(&mut listing).await);

    assert_eq!(listing.locations, ["Pune", "Remote"]);
    let ListingView::Results(jobs) = listing.view() else {
        panic!("expected results");
    };
    assert_eq!(format_salary(&jobs[0], "INR"), "₹800,000 - ₹1,200,000 INR");
    assert_eq!(listing.nav().label(), "Page 1 of 2");

    let queries = app.job_list_queries().await;
    let keys: Vec<&str> = queries[0].iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["company_id", "sort_by", "skip", "limit"]);
}

#[tokio::test]
async fn test_filters_and_paging_reach_the_wire() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![], 40, &[])))
        .mount(&app.server)
        .await;

    let service = JobQueryService::new(app.client(None));
    let mut listing = JobListing::public(
        Some(careerhub_core::types::id::CompanyId::new("c-acme")),
        &app.config.query,
    );
    service.refresh(&mut listing).await;

    listing.next_page();
    listing.set_work_policy(Choice::Only(WorkPolicy::Remote));
    listing.set_search("  rust ");
    service.refresh(&mut listing).await;

    let queries = app.job_list_queries().await;
    assert_eq!(queries.len(), 2);
    let second = &queries[1];
    let get = |k: &str| second.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("search"), Some("rust"));
    assert_eq!(get("work_policy"), Some("Remote"));
    // public page keeps its page when filters change
    assert_eq!(get("skip"), Some("15"));
    assert_eq!(get("limit"), Some("15"));
}

#[tokio::test]
async fn test_draft_and_unknown_pages_are_not_found() {
    let app = TestApp::new().await;
    app.mount_company(company_json("draft", "u1", "DRAFT")).await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .and(query_param("slug", "ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Company not found"))
        .mount(&app.server)
        .await;

    let service = CompanyService::new(app.client(None));
    assert_eq!(service.public_page("draft").await.unwrap(), PublicPage::NotFound);
    assert_eq!(service.public_page("ghost").await.unwrap(), PublicPage::NotFound);
}

#[tokio::test]
async fn test_failed_listing_degrades_to_empty() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/list"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    let service = JobQueryService::new(app.client(None));
    let mut listing = JobListing::public(
        Some(careerhub_core::types::id::CompanyId::new("c-acme")),
        &app.config.query,
    );
    assert!(service.refresh(&mut listing).await);
    assert_eq!(listing.view(), ListingView::Empty);
    assert!(listing.last_error.is_some());
}
