//! Job listing entity and its request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use careerhub_core::AppError;
use careerhub_core::types::id::{CompanyId, JobId};

use super::salary::{SalaryDisclosure, SalaryFrequency, SalaryType};
use super::status::{JobStatus, WorkPolicy};

/// Employment type choices offered by the job form.
pub const EMPLOYMENT_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];

/// Experience level choices offered by the job form.
pub const EXPERIENCE_LEVELS: [&str; 4] = ["Entry-level", "Mid-level", "Senior", "Lead"];

/// Job type choices offered by the job form.
pub const JOB_TYPES: [&str; 2] = ["Permanent", "Temporary"];

/// A job listing as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    #[serde(rename = "job_id", alias = "_id")]
    pub id: JobId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Job title.
    pub title: String,
    /// Rich-text description (HTML).
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Office location, if any.
    #[serde(default)]
    pub location: Option<String>,
    /// Remote, hybrid or on-site.
    pub work_policy: WorkPolicy,
    /// Department name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    /// e.g. `Full-time`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub employment_type: String,
    /// e.g. `Senior`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience_level: String,
    /// e.g. `Permanent`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_type: String,
    /// Salary disclosure mode.
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_type: SalaryType,
    /// Lower bound for range salaries.
    #[serde(default)]
    pub min_salary: Option<f64>,
    /// Upper bound for range salaries.
    #[serde(default)]
    pub max_salary: Option<f64>,
    /// Amount for fixed salaries.
    #[serde(default)]
    pub salary_fixed: Option<f64>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Pay period.
    #[serde(default, deserialize_with = "lenient_frequency")]
    pub salary_frequency: Option<SalaryFrequency>,
    /// Lifecycle status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,
    /// When the job was posted.
    #[serde(default, alias = "createdAt")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Resolve the salary amounts implied by the disclosure mode.
    pub fn salary(&self) -> Result<SalaryDisclosure, AppError> {
        SalaryDisclosure::resolve(
            self.salary_type,
            self.min_salary,
            self.max_salary,
            self.salary_fixed,
        )
    }

    /// Whether the job still accepts applications.
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }

    /// Location text, or the work policy when no location is set.
    pub fn location_label(&self) -> String {
        match self.location.as_deref().map(str::trim) {
            Some(loc) if !loc.is_empty() => loc.to_string(),
            _ => self.work_policy.to_string(),
        }
    }
}

/// Payload for `POST /jobs/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_salary_fields"))]
pub struct CreateJob {
    /// Owning company, filled in by the service from the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    /// Job title.
    #[validate(custom(function = "not_blank", message = "is required"))]
    pub title: String,
    /// Rich-text description.
    #[validate(custom(function = "not_blank", message = "is required"))]
    pub description: String,
    /// Office location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Work policy.
    pub work_policy: WorkPolicy,
    /// Department.
    pub department: String,
    /// Employment type.
    pub employment_type: String,
    /// Experience level.
    pub experience_level: String,
    /// Job type.
    pub job_type: String,
    /// Salary disclosure mode.
    pub salary_type: SalaryType,
    /// Range lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    /// Range upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
    /// Fixed amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_fixed: Option<f64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Pay period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_frequency: Option<SalaryFrequency>,
}

impl CreateJob {
    /// A confidential, on-site, full-time job with the given title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            company_id: None,
            title: title.into(),
            description: description.into(),
            location: None,
            work_policy: WorkPolicy::Onsite,
            department: String::new(),
            employment_type: EMPLOYMENT_TYPES[0].to_string(),
            experience_level: EXPERIENCE_LEVELS[0].to_string(),
            job_type: JOB_TYPES[0].to_string(),
            salary_type: SalaryType::Confidential,
            min_salary: None,
            max_salary: None,
            salary_fixed: None,
            currency: None,
            salary_frequency: None,
        }
    }

    /// Drop amount fields the disclosure mode does not use.
    pub fn normalize_salary(&mut self) {
        match self.salary_type {
            SalaryType::Confidential => {
                self.min_salary = None;
                self.max_salary = None;
                self.salary_fixed = None;
            }
            SalaryType::Range => self.salary_fixed = None,
            SalaryType::Fixed => {
                self.min_salary = None;
                self.max_salary = None;
            }
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty or unrecognised pay periods read as unset.
fn lenient_frequency<'de, D>(deserializer: D) -> Result<Option<SalaryFrequency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_salary_fields(job: &CreateJob) -> Result<(), ValidationError> {
    let disclosure =
        SalaryDisclosure::resolve(job.salary_type, job.min_salary, job.max_salary, job.salary_fixed)
            .map_err(|e| ValidationError::new("salary").with_message(e.message.into()))?;

    match disclosure {
        SalaryDisclosure::Range { min, max } if min > max => Err(ValidationError::new("salary")
            .with_message("Minimum salary cannot exceed maximum salary".into())),
        SalaryDisclosure::Range { min, .. } if min < 0.0 => {
            Err(ValidationError::new("salary").with_message("Salary cannot be negative".into()))
        }
        SalaryDisclosure::Fixed { amount } if amount < 0.0 => {
            Err(ValidationError::new("salary").with_message("Salary cannot be negative".into()))
        }
        _ => Ok(()),
    }
}

/// Partial update payload for `PATCH /jobs/update`.
///
/// Only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    /// Target job, filled in by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_policy: Option<WorkPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_type: Option<SalaryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_fixed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_frequency: Option<SalaryFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl UpdateJob {
    /// An update that only changes the status.
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Apply the present fields to a job in place.
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(v) = &self.title {
            job.title = v.clone();
        }
        if let Some(v) = &self.description {
            job.description = v.clone();
        }
        if let Some(v) = &self.location {
            job.location = Some(v.clone());
        }
        if let Some(v) = self.work_policy {
            job.work_policy = v;
        }
        if let Some(v) = &self.department {
            job.department = v.clone();
        }
        if let Some(v) = &self.employment_type {
            job.employment_type = v.clone();
        }
        if let Some(v) = &self.experience_level {
            job.experience_level = v.clone();
        }
        if let Some(v) = &self.job_type {
            job.job_type = v.clone();
        }
        if let Some(v) = self.salary_type {
            job.salary_type = v;
        }
        if self.min_salary.is_some() {
            job.min_salary = self.min_salary;
        }
        if self.max_salary.is_some() {
            job.max_salary = self.max_salary;
        }
        if self.salary_fixed.is_some() {
            job.salary_fixed = self.salary_fixed;
        }
        if let Some(v) = &self.currency {
            job.currency = Some(v.clone());
        }
        if self.salary_frequency.is_some() {
            job.salary_frequency = self.salary_frequency;
        }
        if let Some(v) = self.status {
            job.status = v;
        }
    }
}

/// Aggregate counts returned alongside a page of jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListMetadata {
    /// Total jobs matching the filters.
    #[serde(default)]
    pub total_count: u64,
    /// Open jobs for the company.
    #[serde(default)]
    pub open_jobs: u64,
    /// Closed jobs for the company.
    #[serde(default)]
    pub closed_jobs: u64,
    /// Distinct locations across the filtered set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_array: Option<Vec<String>>,
}

/// Response body of `GET /jobs/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobListResponse {
    /// The requested page.
    #[serde(default)]
    pub result: Vec<Job>,
    /// Counts and location facets.
    #[serde(default)]
    pub metadata: JobListMetadata,
}
