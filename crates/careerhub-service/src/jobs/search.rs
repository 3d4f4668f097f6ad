//! Drives a [`JobListing`] from filter changes to applied responses.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use careerhub_client::JobsApi;
use careerhub_core::AppResult;
use careerhub_core::config::QueryConfig;

use super::debounce::Debouncer;
use super::listing::{JobListing, Refetch};
use super::query::{FetchOutcome, JobQueryService};

/// What one [`JobSearch::next_event`] step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// The search input settled and a request was sent.
    Started,
    /// The search input settled but the listing has no company to query.
    Skipped,
    /// A response was applied to the listing.
    Applied,
    /// A superseded response arrived and was dropped.
    Stale,
}

/// Search session for one listing.
///
/// Dropdown and page changes request immediately and cancel any pending
/// search. Search keystrokes wait for the debounce delay, so a burst of
/// them sends one request with the final term. Requests run on spawned
/// tasks; their responses come back through [`JobSearch::next_event`].
#[derive(Debug)]
pub struct JobSearch<A: JobsApi> {
    service: JobQueryService<A>,
    debouncer: Debouncer<String>,
    results_tx: mpsc::UnboundedSender<FetchOutcome>,
    results_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<A: JobsApi> JobSearch<A> {
    /// Must be called inside a Tokio runtime.
    pub fn new(service: JobQueryService<A>, debounce: Duration) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            service,
            debouncer: Debouncer::new(debounce),
            results_tx,
            results_rx,
        }
    }

    /// Search session using the configured debounce delay.
    pub fn from_config(service: JobQueryService<A>, config: &QueryConfig) -> Self {
        Self::new(service, Duration::from_millis(config.debounce_ms))
    }

    /// Act on what a listing mutator returned. Returns whether a request was sent.
    pub fn refetch(&self, listing: &mut JobListing, refetch: Refetch) -> AppResult<bool> {
        match refetch {
            Refetch::Now => {
                self.debouncer.cancel()?;
                Ok(self.start(listing))
            }
            Refetch::Debounced => {
                self.debouncer.push(listing.filters.search.clone())?;
                Ok(false)
            }
            Refetch::Skip => Ok(false),
        }
    }

    /// Send a request for the listing's current filters on a spawned task.
    pub fn start(&self, listing: &mut JobListing) -> bool {
        let Some(pending) = self.service.begin(listing) else {
            return false;
        };

        let service = self.service.clone();
        let results = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = service.fetch(pending).await;
            // receiver is gone only when the search session was dropped
            let _ = results.send(outcome);
        });
        true
    }

    /// Wait for the next settled search or completed request.
    ///
    /// Cancel safe: nothing is lost when the returned future is dropped
    /// before it completes.
    pub async fn next_event(&mut self, listing: &mut JobListing) -> Option<SearchEvent> {
        tokio::select! {
            Some(term) = self.debouncer.next() => {
                debug!(search = %term, "Search settled");
                Some(if self.start(listing) {
                    SearchEvent::Started
                } else {
                    SearchEvent::Skipped
                })
            }
            Some(outcome) = self.results_rx.recv() => {
                Some(if listing.apply(outcome.ticket, outcome.result) {
                    SearchEvent::Applied
                } else {
                    SearchEvent::Stale
                })
            }
            else => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use careerhub_client::JobQuery;
    use careerhub_core::types::Choice;
    use careerhub_core::types::id::{CompanyId, JobId};
    use careerhub_entity::job::{CreateJob, Job, JobListResponse, UpdateJob, WorkPolicy};

    use super::*;

    #[derive(Debug, Default)]
    struct CountingJobs {
        requests: Mutex<Vec<JobQuery>>,
    }

    impl CountingJobs {
        fn searches(&self) -> Vec<Option<String>> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|q| q.search.clone())
                .collect()
        }
    }

    #[async_trait]
    impl JobsApi for CountingJobs {
        async fn list(&self, query: &JobQuery) -> AppResult<JobListResponse> {
            self.requests.lock().unwrap().push(query.clone());
            Ok(JobListResponse::default())
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

    fn setup() -> (Arc<CountingJobs>, JobSearch<CountingJobs>, JobListing) {
        let api = Arc::new(CountingJobs::default());
        let config = QueryConfig::default();
        let search = JobSearch::from_config(JobQueryService::new(api.clone()), &config);
        let listing = JobListing::public(Some(CompanyId::new("c1")), &config);
        (api, search, listing)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_send_one_request() {
        let (api, mut search, mut listing) = setup();

        for term in ["r", "ru", "rus", "rust"] {
            let refetch = listing.set_search(term);
            assert!(!search.refetch(&mut listing, refetch).unwrap());
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert!(api.searches().is_empty());

        assert_eq!(search.next_event(&mut listing).await, Some(SearchEvent::Started));
        assert_eq!(search.next_event(&mut listing).await, Some(SearchEvent::Applied));
        assert_eq!(api.searches(), vec![Some("rust".to_string())]);
        assert!(!listing.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropdown_change_cancels_pending_search() {
        let (api, mut search, mut listing) = setup();

        let refetch = listing.set_search("rust");
        search.refetch(&mut listing, refetch).unwrap();
        let refetch = listing.set_location(Choice::Only("Pune".to_string()));
        assert!(search.refetch(&mut listing, refetch).unwrap());

        assert_eq!(search.next_event(&mut listing).await, Some(SearchEvent::Applied));
        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert!(search.debouncer.try_next().is_none());

        let requests = api.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].search.as_deref(), Some("rust"));
        assert_eq!(requests[0].location.as_deref(), Some("Pune"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_response_wins_over_older() {
        let (api, mut search, mut listing) = setup();

        assert!(search.start(&mut listing));
        let refetch = listing.set_work_policy(Choice::Only(WorkPolicy::Remote));
        assert!(search.refetch(&mut listing, refetch).unwrap());

        let mut events = vec![
            search.next_event(&mut listing).await,
            search.next_event(&mut listing).await,
        ];
        events.sort_by_key(|e| *e != Some(SearchEvent::Stale));
        assert_eq!(events, vec![Some(SearchEvent::Stale), Some(SearchEvent::Applied)]);
        assert_eq!(api.requests.lock().unwrap().len(), 2);
    }
}
