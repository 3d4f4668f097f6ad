//! Recruiter job management: create, edit, close and delete postings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use careerhub_client::{JobQuery, JobsApi};
use careerhub_core::AppError;
use careerhub_core::types::PageRequest;
use careerhub_core::types::id::{CompanyId, JobId};
use careerhub_entity::job::{CreateJob, Job, JobStatus, UpdateJob};

/// Page size used when scanning a company's jobs for a single posting.
const SCAN_PAGE_SIZE: u64 = 50;

/// Job counts shown on the recruiter dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// All jobs for the company.
    pub total: u64,
    /// Jobs accepting applications.
    pub open: u64,
    /// Closed jobs.
    pub closed: u64,
}

/// Job management service for the signed-in recruiter's company.
#[derive(Debug)]
pub struct JobManager<A: JobsApi> {
    /// Job endpoints.
    api: Arc<A>,
}

impl<A: JobsApi> Clone for JobManager<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: JobsApi> JobManager<A> {
    /// Creates a new job manager.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Validates and posts a new job for `company_id`.
    ///
    /// Amount fields the salary mode does not use are dropped before sending.
    pub async fn create(&self, company_id: &CompanyId, mut job: CreateJob) -> Result<Job, AppError> {
        job.company_id = Some(company_id.clone());
        job.normalize_salary();
        job.validate()?;

        let created = self.api.create(&job).await?;
        info!(job_id = %created.id, company_id = %company_id, title = %created.title, "Job posted");
        Ok(created)
    }

    /// Applies a partial update.
    ///
    /// On success `job` is replaced by the server's copy. On failure it is
    /// left exactly as it was.
    pub async fn update(&self, job: &mut Job, update: UpdateJob) -> Result<(), AppError> {
        if let Some(next) = update.status {
            if next != job.status && !job.status.can_transition_to(next) {
                return Err(AppError::validation(format!(
                    "Job status cannot change from {} to {}",
                    job.status, next
                )));
            }
        }

        match self.api.update(&job.id, update).await {
            Ok(updated) => {
                *job = updated;
                Ok(())
            }
            Err(e) => {
                warn!(job_id = %job.id, error = %e, "Job update failed, keeping previous state");
                Err(e)
            }
        }
    }

    /// Closes an open job. There is no way back to open.
    pub async fn close(&self, job: &mut Job) -> Result<(), AppError> {
        if !job.status.can_transition_to(JobStatus::Closed) {
            return Err(AppError::validation(format!("Job '{}' is already closed", job.title)));
        }
        self.update(job, UpdateJob::status(JobStatus::Closed)).await?;
        info!(job_id = %job.id, "Job closed");
        Ok(())
    }

    /// Permanently deletes a job.
    pub async fn delete(&self, job_id: &JobId) -> Result<(), AppError> {
        self.api.delete(job_id).await
    }

    /// Finds a job that belongs to `company_id`.
    ///
    /// A job owned by another company is reported as not found.
    pub async fn find_owned(&self, job_id: &JobId, company_id: &CompanyId) -> Result<Job, AppError> {
        let mut page = 1;
        loop {
            let query = JobQuery::for_company(company_id.clone(), PageRequest::new(page, SCAN_PAGE_SIZE));
            let resp = self.api.list(&query).await?;
            let fetched = resp.result.len() as u64;

            if let Some(job) = resp
                .result
                .into_iter()
                .find(|j| &j.id == job_id && &j.company_id == company_id)
            {
                return Ok(job);
            }

            if fetched == 0 || page * SCAN_PAGE_SIZE >= resp.metadata.total_count {
                return Err(AppError::not_found(format!("Job '{job_id}' not found")));
            }
            page += 1;
        }
    }

    /// Job counts for the dashboard.
    pub async fn dashboard(&self, company_id: &CompanyId) -> Result<DashboardSummary, AppError> {
        let query = JobQuery::for_company(company_id.clone(), PageRequest::new(1, 1));
        let meta = self.api.list(&query).await?.metadata;
        Ok(DashboardSummary {
            total: meta.total_count,
            open: meta.open_jobs,
            closed: meta.closed_jobs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use careerhub_core::AppResult;
    use careerhub_core::error::ErrorKind;
    use careerhub_entity::job::{JobListMetadata, JobListResponse, SalaryType};

    use super::*;

    #[derive(Debug, Default)]
    struct FakeJobs {
        jobs: Mutex<Vec<Job>>,
        created: Mutex<Vec<CreateJob>>,
        updates: Mutex<usize>,
        fail_updates: bool,
    }

    fn job(id: &str, company: &str) -> Job {
        serde_json::from_value(serde_json::json!({
            "job_id": id,
            "company_id": company,
            "title": format!("Job {id}"),
            "work_policy": "Onsite",
            "status": "OPEN"
        }))
        .unwrap()
    }

    #[async_trait]
    impl JobsApi for FakeJobs {
        async fn list(&self, query: &JobQuery) -> AppResult<JobListResponse> {
            let jobs = self.jobs.lock().unwrap();
            let owned: Vec<Job> = jobs
                .iter()
                .filter(|j| j.company_id == query.company_id)
                .cloned()
                .collect();
            let open = owned.iter().filter(|j| j.is_open()).count() as u64;
            let total = owned.len() as u64;
            Ok(JobListResponse {
                result: owned
                    .into_iter()
                    .skip(query.skip as usize)
                    .take(query.limit as usize)
                    .collect(),
                metadata: JobListMetadata {
                    total_count: total,
                    open_jobs: open,
                    closed_jobs: total - open,
                    location_array: None,
                },
            })
        }

        async fn create(&self, job: &CreateJob) -> AppResult<Job> {
            self.created.lock().unwrap().push(job.clone());
            let company = job.company_id.clone().unwrap();
            Ok(job_with_title(&company, &job.title))
        }

        async fn update(&self, job_id: &JobId, update: UpdateJob) -> AppResult<Job> {
            *self.updates.lock().unwrap() += 1;
            if self.fail_updates {
                return Err(AppError::from_status(500, ""));
            }
            let mut jobs = self.jobs.lock().unwrap();
            let job = jobs
                .iter_mut()
                .find(|j| &j.id == job_id)
                .ok_or_else(|| AppError::not_found("missing"))?;
            update.apply_to(job);
            Ok(job.clone())
        }

        async fn delete(&self, job_id: &JobId) -> AppResult<()> {
            self.jobs.lock().unwrap().retain(|j| &j.id != job_id);
            Ok(())
        }
    }

    fn job_with_title(company: &CompanyId, title: &str) -> Job {
        let mut j = job("new", company.as_str());
        j.title = title.to_string();
        j
    }

    fn seeded(fail_updates: bool) -> Arc<FakeJobs> {
        let mut jobs: Vec<Job> = (0..60).map(|i| job(&format!("a{i}"), "c1")).collect();
        jobs.push(job("b1", "c2"));
        Arc::new(FakeJobs {
            jobs: Mutex::new(jobs),
            fail_updates,
            ..FakeJobs::default()
        })
    }

    #[tokio::test]
    async fn test_create_validates_before_sending() {
        let api = seeded(false);
        let manager = JobManager::new(api.clone());

        let err = manager
            .create(&CompanyId::new("c1"), CreateJob::new("", "desc"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(api.created.lock().unwrap().is_empty());

        let mut form = CreateJob::new("Engineer", "desc");
        form.salary_type = SalaryType::Fixed;
        form.salary_fixed = Some(90_000.0);
        form.min_salary = Some(1.0);
        manager.create(&CompanyId::new("c1"), form).await.unwrap();

        let sent = api.created.lock().unwrap();
        assert_eq!(sent[0].company_id.as_ref().map(|c| c.as_str()), Some("c1"));
        assert_eq!(sent[0].min_salary, None);
    }

    #[tokio::test]
    async fn test_close_is_one_way() {
        let api = seeded(false);
        let manager = JobManager::new(api.clone());
        let mut target = job("a0", "c1");

        manager.close(&mut target).await.unwrap();
        assert_eq!(target.status, JobStatus::Closed);

        let err = manager.close(&mut target).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = manager
            .update(&mut target, UpdateJob::status(JobStatus::Open))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(*api.updates.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_job() {
        let manager = JobManager::new(seeded(true));
        let mut target = job("a0", "c1");
        let before = target.clone();

        let update = UpdateJob {
            title: Some("Renamed".into()),
            ..UpdateJob::default()
        };
        assert!(manager.update(&mut target, update).await.is_err());
        assert_eq!(target, before);
    }

    #[tokio::test]
    async fn test_find_owned_scans_pages_and_hides_foreign_jobs() {
        let manager = JobManager::new(seeded(false));
        let found = manager
            .find_owned(&JobId::new("a55"), &CompanyId::new("c1"))
            .await
            .unwrap();
        assert_eq!(found.id.as_str(), "a55");

        let err = manager
            .find_owned(&JobId::new("b1"), &CompanyId::new("c1"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let api = seeded(false);
        let manager = JobManager::new(api.clone());
        let mut target = job("a1", "c1");
        manager.close(&mut target).await.unwrap();

        let summary = manager.dashboard(&CompanyId::new("c1")).await.unwrap();
        assert_eq!(
            summary,
            DashboardSummary {
                total: 60,
                open: 59,
                closed: 1
            }
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let api = seeded(false);
        let manager = JobManager::new(api.clone());
        manager.delete(&JobId::new("a0")).await.unwrap();
        let err = manager
            .find_owned(&JobId::new("a0"), &CompanyId::new("c1"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
