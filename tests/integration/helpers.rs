//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use careerhub_client::ApiClient;
use careerhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// Mock of the careers-page REST API
    pub server: MockServer,
    /// Application config pointing at the mock
    pub config: AppConfig,
    /// Holds the session file
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().expect("temp dir");

        let mut config = AppConfig::default();
        config.api.base_url = format!("{}/api", server.uri());
        config.api.asset_base_url = "https://bucket.example.com".to_string();
        config.site.base_url = "https://jobs.example.com".to_string();
        config.session.path = dir.path().join("session.json").display().to_string();

        Self {
            server,
            config,
            dir,
        }
    }

    /// An API client, optionally carrying a bearer token
    pub fn client(&self, token: Option<&str>) -> Arc<ApiClient> {
        Arc::new(ApiClient::new(&self.config.api, token.map(String::from)).expect("client"))
    }

    /// Serve a company for `GET /company?slug=`
    pub async fn mount_company(&self, company: Value) {
        let slug = company["slug"].as_str().unwrap_or_default().to_string();
        Mock::given(method("GET"))
            .and(path("/api/company"))
            .and(query_param("slug", slug.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(company))
            .mount(&self.server)
            .await;
    }

    /// Query strings of every `GET /jobs/list` received so far, in order
    pub async fn job_list_queries(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == "/api/jobs/list")
            .map(|r| r.url.query_pairs().into_owned().collect())
            .collect()
    }
}

/// A company as the API returns it
pub fn company_json(slug: &str, owner: &str, published: &str) -> Value {
    json!({
        "company_id": format!("c-{slug}"),
        "user_id": owner,
        "name": "Acme Labs",
        "slug": slug,
        "website": "https://acme.example.com",
        "published": published,
        "sections": [
            { "_id": "s2", "type": "about", "title": "About", "content": "<p>We build.</p>", "order": 2 },
            { "_id": "s1", "type": "hero", "title": "Join us", "content": "", "order": 1 }
        ]
    })
}

/// A job as the API returns it
pub fn job_json(id: &str, company_id: &str, status: &str) -> Value {
    json!({
        "job_id": id,
        "company_id": company_id,
        "title": format!("Engineer {id}"),
        "location": "Pune",
        "work_policy": "Hybrid",
        "salary_type": "RANGE",
        "min_salary": 800000,
        "max_salary": 1200000,
        "status": status
    })
}

/// A `GET /jobs/list` response body
pub fn list_json(jobs: Vec<Value>, total: u64, locations: &[&str]) -> Value {
    json!({
        "result": jobs,
        "metadata": {
            "totalCount": total,
            "openJobs": total,
            "closedJobs": 0,
            "locationArray": locations
        }
    })
}
