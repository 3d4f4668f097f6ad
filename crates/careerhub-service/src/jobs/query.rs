//! Job query service: turns a listing's filters into requests and feeds the
//! responses back through the sequence guard.

use std::sync::Arc;

use tracing::{debug, info};

use careerhub_client::{JobQuery, JobsApi};
use careerhub_core::AppResult;
use careerhub_entity::job::JobListResponse;

use super::listing::JobListing;
use super::sequence::Ticket;

/// A request that has been issued a ticket but not yet sent.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    /// Sequence ticket of this request.
    pub ticket: Ticket,
    /// The encoded request.
    pub query: JobQuery,
}

/// A completed request, ready to be applied to its listing.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence ticket of the request.
    pub ticket: Ticket,
    /// API result.
    pub result: AppResult<JobListResponse>,
}

/// Executes job listing requests.
///
/// There is no cache: every call goes to the API.
#[derive(Debug)]
pub struct JobQueryService<A: JobsApi> {
    /// Job endpoints.
    api: Arc<A>,
}

impl<A: JobsApi> Clone for JobQueryService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: JobsApi> JobQueryService<A> {
    /// Creates a new job query service.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Issue a ticket for the listing's current filters.
    ///
    /// Returns `None` without touching the listing when no company is set.
    pub fn begin(&self, listing: &mut JobListing) -> Option<PendingFetch> {
        let Some(query) = listing.filters.to_query(listing.page_size()) else {
            debug!("No company id, skipping job listing request");
            return None;
        };

        let ticket = listing.issue_ticket();
        debug!(
            ticket = ticket.value(),
            company_id = %query.company_id,
            skip = query.skip,
            limit = query.limit,
            "Issuing job listing request"
        );
        Some(PendingFetch { ticket, query })
    }

    /// Send a pending request. Does not touch any listing.
    pub async fn fetch(&self, pending: PendingFetch) -> FetchOutcome {
        let result = self.api.list(&pending.query).await;
        FetchOutcome {
            ticket: pending.ticket,
            result,
        }
    }

    /// Request the listing's current filters and apply the response.
    ///
    /// Errors are logged and degrade the listing to an empty result; they are
    /// never returned. Returns whether the listing was updated.
    pub async fn refresh(&self, listing: &mut JobListing) -> bool {
        let Some(pending) = self.begin(listing) else {
            return false;
        };

        let outcome = self.fetch(pending).await;
        let applied = listing.apply(outcome.ticket, outcome.result);
        if applied && listing.last_error.is_none() {
            info!(
                company_id = ?listing.filters.company_id,
                page = listing.filters.page,
                total = listing.total_count,
                "Job listing refreshed"
            );
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use careerhub_core::AppError;
    use careerhub_core::config::QueryConfig;
    use careerhub_core::types::Choice;
    use careerhub_core::types::id::{CompanyId, JobId};
    use careerhub_entity::job::{
        CreateJob, Job, JobListMetadata, JobStatus, UpdateJob, WorkPolicy,
    };

    use super::*;

    #[derive(Debug, Default)]
    struct FakeJobs {
        requests: Mutex<Vec<JobQuery>>,
        fail: bool,
    }

    fn job(id: &str) -> Job {
        serde_json::from_value(serde_json::json!({
            "job_id": id,
            "company_id": "c1",
            "title": format!("Job {id}"),
            "work_policy": "Remote",
            "location": "Pune"
        }))
        .unwrap()
    }

    #[async_trait]
    impl JobsApi for FakeJobs {
        async fn list(&self, query: &JobQuery) -> AppResult<JobListResponse> {
            self.requests.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(AppError::from_status(500, "boom"));
            }
            Ok(JobListResponse {
                result: vec![job("j1"), job("j2")],
                metadata: JobListMetadata {
                    total_count: 32,
                    open_jobs: 30,
                    closed_jobs: 2,
                    location_array: Some(vec!["Pune".into(), "Remote".into()]),
                },
            })
        }

        async fn create(&self, _job: &CreateJob) -> AppResult<Job> {
            unimplemented!()
        }

        async fn update(&self, _job_id: &JobId, _update: UpdateJob) -> AppResult<Job> {
            unimplemented!()
        }

        async fn delete(&self, _job_id: &JobId) -> AppResult<()> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_refresh_without_company_sends_nothing() {
        let api = Arc::new(FakeJobs::default());
        let service = JobQueryService::new(api.clone());
        let mut listing = JobListing::public(None, &QueryConfig::default());
        listing.jobs = vec![job("old")];

        assert!(!service.refresh(&mut listing).await);
        assert!(api.requests.lock().unwrap().is_empty());
        assert_eq!(listing.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_populates_public_listing() {
        let api = Arc::new(FakeJobs::default());
        let service = JobQueryService::new(api.clone());
        let mut listing = JobListing::public(Some(CompanyId::new("c1")), &QueryConfig::default());
        listing.set_work_policy(Choice::Only(WorkPolicy::Hybrid));

        assert!(service.refresh(&mut listing).await);
        assert_eq!(listing.jobs.len(), 2);
        assert_eq!(listing.total_count, 32);
        assert_eq!(listing.locations, ["Pune", "Remote"]);
        assert_eq!(listing.nav().label(), "Page 1 of 3");

        let sent = api.requests.lock().unwrap();
        assert_eq!(sent[0].limit, 15);
        assert_eq!(sent[0].work_policy, Some(WorkPolicy::Hybrid));
    }

    #[tokio::test]
    async fn test_manage_listing_uses_its_own_page_size() {
        let api = Arc::new(FakeJobs::default());
        let service = JobQueryService::new(api.clone());
        let mut listing = JobListing::manage(Some(CompanyId::new("c1")), &QueryConfig::default());
        listing.set_status(Choice::Only(JobStatus::Open));
        service.refresh(&mut listing).await;

        let sent = api.requests.lock().unwrap();
        assert_eq!((sent[0].skip, sent[0].limit), (0, 10));
        assert_eq!(sent[0].status, Some(JobStatus::Open));
        assert!(listing.locations.is_empty());
    }

    #[tokio::test]
    async fn test_failed_refresh_degrades_to_empty() {
        let api = Arc::new(FakeJobs {
            fail: true,
            ..FakeJobs::default()
        });
        let service = JobQueryService::new(api);
        let mut listing = JobListing::public(Some(CompanyId::new("c1")), &QueryConfig::default());
        listing.jobs = vec![job("old")];

        assert!(service.refresh(&mut listing).await);
        assert!(listing.jobs.is_empty());
        assert!(!listing.loading);
        assert_eq!(listing.last_error.as_ref().map(|e| e.message.as_str()), Some("boom"));
    }

    #[tokio::test]
    async fn test_out_of_order_outcomes_keep_latest() {
        let api = Arc::new(FakeJobs::default());
        let service = JobQueryService::new(api);
        let mut listing = JobListing::public(Some(CompanyId::new("c1")), &QueryConfig::default());

        let older = service.begin(&mut listing).unwrap();
        listing.set_search("rust");
        let newer = service.begin(&mut listing).unwrap();

        let newer_outcome = service.fetch(newer).await;
        let older_outcome = service.fetch(older).await;

        assert!(listing.apply(newer_outcome.ticket, newer_outcome.result));
        let snapshot = listing.jobs.clone();
        assert!(!listing.apply(older_outcome.ticket, Ok(JobListResponse::default())));
        assert_eq!(listing.jobs, snapshot);
    }
}
