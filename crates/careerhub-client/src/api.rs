//! Traits describing the external REST API, one per resource.

use async_trait::async_trait;

use careerhub_core::AppResult;
use careerhub_core::types::id::{CompanyId, JobId, UserId};
use careerhub_entity::company::{Company, CreateCompany, UpdateCompany};
use careerhub_entity::job::{CreateJob, Job, JobListResponse, UpdateJob};
use careerhub_entity::user::{AuthResponse, Credentials, Registration, User};

use crate::query::JobQuery;
use crate::types::{FileUpload, UploadedFile};

/// Account endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync + std::fmt::Debug + 'static {
    /// `POST /auth/register`
    async fn register(&self, registration: &Registration) -> AppResult<AuthResponse>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthResponse>;

    /// `GET /users?user_id=`
    async fn get_user(&self, user_id: &UserId) -> AppResult<User>;
}

/// Company endpoints.
#[async_trait]
pub trait CompanyApi: Send + Sync + std::fmt::Debug + 'static {
    /// `GET /company?slug=`; `None` when no company has the slug.
    async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Company>>;

    /// `GET /company/details?company_id=`
    async fn get_details(&self, company_id: &CompanyId) -> AppResult<Company>;

    /// `POST /company/create`
    async fn create(&self, company: &CreateCompany) -> AppResult<Company>;

    /// `PATCH /company/update`
    async fn update(&self, company_id: &CompanyId, update: UpdateCompany) -> AppResult<Company>;

    /// `GET /company/list?published=true`
    async fn list_published(&self) -> AppResult<Vec<Company>>;
}

/// Job endpoints.
#[async_trait]
pub trait JobsApi: Send + Sync + std::fmt::Debug + 'static {
    /// `GET /jobs/list`
    async fn list(&self, query: &JobQuery) -> AppResult<JobListResponse>;

    /// `POST /jobs/create`
    async fn create(&self, job: &CreateJob) -> AppResult<Job>;

    /// `PATCH /jobs/update`
    async fn update(&self, job_id: &JobId, update: UpdateJob) -> AppResult<Job>;

    /// `DELETE /jobs/delete?job_id=`
    async fn delete(&self, job_id: &JobId) -> AppResult<()>;
}

/// Object storage upload endpoint.
#[async_trait]
pub trait FilesApi: Send + Sync + std::fmt::Debug + 'static {
    /// `POST /files/upload` (multipart, field `document`, optional `folder`).
    async fn upload(&self, file: FileUpload, folder: Option<&str>) -> AppResult<UploadedFile>;
}
