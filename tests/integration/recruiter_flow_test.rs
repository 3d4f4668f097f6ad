//! Integration tests for the recruiter flow: sign in, create a company,
//! publish it and manage a job.

mod helpers;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use careerhub_auth::{RouteDecision, RouteGate, SessionManager, SessionStore};
use careerhub_client::ApiClient;
use careerhub_core::types::id::UserId;
use careerhub_entity::company::{CreateCompany, PublicationState};
use careerhub_entity::job::{CreateJob, JobStatus};
use careerhub_entity::user::{CompanySummary, Credentials};
use careerhub_service::{CompanyService, JobManager, PublishToggle, ToggleOutcome};

use helpers::{TestApp, company_json, job_json};

async fn mount_login(app: &TestApp) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok",
            "user": { "user_id": "u1", "name": "Asha", "email": "asha@example.com" }
        })))
        .mount(&app.server)
        .await;
}

async fn start_sessions(app: &TestApp) -> SessionManager<ApiClient> {
    SessionManager::start(
        (*app.client(None)).clone(),
        SessionStore::from_config(&app.config.session),
        &app.config.session,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_sign_in_create_publish_and_close_job() {
    let app = TestApp::new().await;
    mount_login(&app).await;
    Mock::given(method("POST"))
        .and(path("/api/company/create"))
        .and(header("authorization", "Bearer tok"))
        .and(body_partial_json(json!({ "name": "Acme Labs" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(company_json("acme", "u1", "DRAFT")))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/company/update"))
        .and(body_partial_json(json!({ "company_id": "c-acme", "published": "PUBLISHED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(company_json("acme", "u1", "PUBLISHED")))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/jobs/create"))
        .and(body_partial_json(json!({ "company_id": "c-acme", "title": "Engineer" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json("j1", "c-acme", "OPEN")))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/jobs/update"))
        .and(body_partial_json(json!({ "status": "CLOSED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json("j1", "c-acme", "CLOSED")))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut sessions = start_sessions(&app).await;
    assert_eq!(
        RouteGate::check("/create-company", sessions.current().is_authenticated()),
        RouteDecision::RedirectToLogin
    );

    sessions
        .login(Credentials {
            email: "asha@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        RouteGate::check("/create-company", sessions.current().is_authenticated()),
        RouteDecision::Allow
    );

    let client = app.client(sessions.current().token());
    let company = CompanyService::new(client.clone())
        .create(CreateCompany {
            name: "  Acme Labs ".into(),
            website: "https://acme.example.com".into(),
            description: None,
        })
        .await
        .unwrap();
    assert!(company.is_owned_by(&UserId::new("u1")));
    sessions.set_company(CompanySummary::from(&company)).await.unwrap();

    let toggle = PublishToggle::new(client.clone());
    let outcome = toggle.toggle(&company).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Changed(PublicationState::Published));

    let company_id = sessions.current().company_id().cloned().unwrap();
    let jobs = JobManager::new(client);
    let mut job = jobs
        .create(&company_id, CreateJob::new("Engineer", "<p>Build things</p>"))
        .await
        .unwrap();
    jobs.close(&mut job).await.unwrap();
    assert_eq!(job.status, JobStatus::Closed);
}

#[tokio::test]
async fn test_session_survives_restart_until_logout() {
    let app = TestApp::new().await;
    mount_login(&app).await;

    let mut sessions = start_sessions(&app).await;
    sessions
        .login(Credentials {
            email: "asha@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();

    let mut restarted = start_sessions(&app).await;
    assert_eq!(restarted.current().token(), Some("tok"));

    restarted.logout().await.unwrap();
    assert!(!start_sessions(&app).await.current().is_authenticated());
    assert!(!app.dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_rejected_login_leaves_no_session() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid email or password"))
        .mount(&app.server)
        .await;

    let mut sessions = start_sessions(&app).await;
    let err = sessions
        .login(Credentials {
            email: "asha@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message, "Invalid email or password");
    assert!(!sessions.current().is_authenticated());
}
