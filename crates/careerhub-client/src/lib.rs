//! # careerhub-client
//!
//! HTTP client for the careers-page REST API. The [`api`] traits are the
//! seams the service layer depends on; [`ApiClient`] implements all of them
//! over `reqwest`.

pub mod api;
pub mod client;
pub mod endpoints;
pub mod query;
pub mod types;

pub use api::{AuthApi, CompanyApi, FilesApi, JobsApi};
pub use client::ApiClient;
pub use query::JobQuery;
pub use types::{FileUpload, UploadedFile};
