//! Per-page job listing state and the filter mutators that drive it.

use tracing::{debug, error};

use careerhub_core::AppError;
use careerhub_core::config::QueryConfig;
use careerhub_core::types::id::CompanyId;
use careerhub_core::types::{Choice, JobSort, PageNav};
use careerhub_entity::job::{Job, JobListResponse, JobStatus, SalaryType, WorkPolicy};

use super::filters::JobFilters;
use super::sequence::{ResultSequencer, Ticket};

/// Which page owns a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Job seekers on a published careers page.
    Public,
    /// The recruiter's job management page.
    Manage,
}

/// What a filter change requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refetch {
    /// Request now.
    Now,
    /// Request once the search input settles.
    Debounced,
    /// Nothing changed.
    Skip,
}

/// What the listing area should display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingView<'a> {
    /// A request is in flight.
    Loading,
    /// No jobs to show.
    Empty,
    /// The current page of jobs.
    Results(&'a [Job]),
}

impl ListingView<'_> {
    /// Placeholder text for the non-result states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading..."),
            Self::Empty => Some("No open positions at the moment."),
            Self::Results(_) => None,
        }
    }
}

/// Fetched jobs plus the filters that produced them.
///
/// Each page owns its own listing; nothing is shared between callers.
#[derive(Debug, Clone)]
pub struct JobListing {
    /// Current filters.
    pub filters: JobFilters,
    mode: ListingMode,
    page_size: u64,
    /// Current page of jobs.
    pub jobs: Vec<Job>,
    /// Total jobs matching the filters.
    pub total_count: u64,
    /// Open jobs for the company.
    pub open_jobs: u64,
    /// Closed jobs for the company.
    pub closed_jobs: u64,
    /// Distinct locations in the filtered set (public page only).
    pub locations: Vec<String>,
    /// Whether the latest request is still in flight.
    pub loading: bool,
    /// Error of the latest request, if it failed.
    pub last_error: Option<AppError>,
    sequencer: ResultSequencer,
}

impl JobListing {
    /// A listing with an explicit mode and page size.
    pub fn new(mode: ListingMode, company_id: Option<CompanyId>, page_size: u64) -> Self {
        Self {
            filters: JobFilters {
                company_id,
                ..JobFilters::default()
            },
            mode,
            page_size: page_size.max(1),
            jobs: Vec::new(),
            total_count: 0,
            open_jobs: 0,
            closed_jobs: 0,
            locations: Vec::new(),
            loading: false,
            last_error: None,
            sequencer: ResultSequencer::new(),
        }
    }

    /// The public careers page listing (15 per page by default).
    pub fn public(company_id: Option<CompanyId>, config: &QueryConfig) -> Self {
        Self::new(ListingMode::Public, company_id, config.public_page_size)
    }

    /// The recruiter management listing (10 per page by default).
    pub fn manage(company_id: Option<CompanyId>, config: &QueryConfig) -> Self {
        Self::new(ListingMode::Manage, company_id, config.manage_page_size)
    }

    /// Owning page.
    pub fn mode(&self) -> ListingMode {
        self.mode
    }

    /// Jobs per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Pagination state for the current page.
    pub fn nav(&self) -> PageNav {
        PageNav::new(self.filters.page, self.page_size, self.total_count)
    }

    /// What to display.
    pub fn view(&self) -> ListingView<'_> {
        if self.loading {
            ListingView::Loading
        } else if self.jobs.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Results(&self.jobs)
        }
    }

    /// Update the search term. Search waits for the input to settle.
    pub fn set_search(&mut self, search: impl Into<String>) -> Refetch {
        let search = search.into();
        if search == self.filters.search {
            return Refetch::Skip;
        }
        self.filters.search = search;
        self.filter_changed();
        Refetch::Debounced
    }

    /// Update the work policy filter.
    pub fn set_work_policy(&mut self, value: Choice<WorkPolicy>) -> Refetch {
        if value == self.filters.work_policy {
            return Refetch::Skip;
        }
        self.filters.work_policy = value;
        self.filter_changed();
        Refetch::Now
    }

    /// Update the location filter.
    pub fn set_location(&mut self, value: Choice<String>) -> Refetch {
        if value == self.filters.location {
            return Refetch::Skip;
        }
        self.filters.location = value;
        self.filter_changed();
        Refetch::Now
    }

    /// Update the salary disclosure filter.
    pub fn set_salary_type(&mut self, value: Choice<SalaryType>) -> Refetch {
        if value == self.filters.salary_type {
            return Refetch::Skip;
        }
        self.filters.salary_type = value;
        self.filter_changed();
        Refetch::Now
    }

    /// Update the status filter.
    pub fn set_status(&mut self, value: Choice<JobStatus>) -> Refetch {
        if value == self.filters.status {
            return Refetch::Skip;
        }
        self.filters.status = value;
        self.filter_changed();
        Refetch::Now
    }

    /// Update the sort mode.
    pub fn set_sort(&mut self, sort: JobSort) -> Refetch {
        if sort == self.filters.sort_by {
            return Refetch::Skip;
        }
        self.filters.sort_by = sort;
        self.filter_changed();
        Refetch::Now
    }

    /// Advance one page unless already on the last.
    pub fn next_page(&mut self) -> Refetch {
        if !self.nav().has_next {
            return Refetch::Skip;
        }
        self.filters.page += 1;
        Refetch::Now
    }

    /// Go back one page unless already on the first.
    pub fn previous_page(&mut self) -> Refetch {
        if !self.nav().has_previous || self.filters.page <= 1 {
            return Refetch::Skip;
        }
        self.filters.page -= 1;
        Refetch::Now
    }

    /// Reset search, dropdowns, sort and page.
    pub fn clear_filters(&mut self) -> Refetch {
        let before = self.filters.clone();
        self.filters.clear();
        if before == self.filters {
            Refetch::Skip
        } else {
            Refetch::Now
        }
    }

    // The management page returns to page 1 on any filter change; the public
    // page keeps its page.
    fn filter_changed(&mut self) {
        if self.mode == ListingMode::Manage {
            self.filters.page = 1;
        }
    }

    pub(crate) fn issue_ticket(&mut self) -> Ticket {
        self.loading = true;
        self.sequencer.issue()
    }

    /// Apply a response. Returns `false` when the ticket has been superseded
    /// and the response was dropped.
    pub fn apply(&mut self, ticket: Ticket, result: Result<JobListResponse, AppError>) -> bool {
        if !self.sequencer.is_latest(ticket) {
            debug!(ticket = ticket.value(), "Dropping stale job listing response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(resp) => {
                self.jobs = resp.result;
                self.total_count = resp.metadata.total_count;
                self.open_jobs = resp.metadata.open_jobs;
                self.closed_jobs = resp.metadata.closed_jobs;
                if self.mode == ListingMode::Public {
                    self.locations = resp.metadata.location_array.unwrap_or_default();
                }
                self.last_error = None;
            }
            Err(e) => {
                error!(
                    company_id = ?self.filters.company_id,
                    page = self.filters.page,
                    error = %e,
                    "Failed to fetch jobs"
                );
                self.jobs.clear();
                self.total_count = 0;
                self.open_jobs = 0;
                self.closed_jobs = 0;
                self.locations.clear();
                self.last_error = Some(e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerhub_entity::job::JobListMetadata;

    fn listing(mode: ListingMode) -> JobListing {
        JobListing::new(mode, Some(CompanyId::new("c1")), 10)
    }

    fn response(total: u64, locations: &[&str]) -> JobListResponse {
        JobListResponse {
            result: Vec::new(),
            metadata: JobListMetadata {
                total_count: total,
                open_jobs: total,
                closed_jobs: 0,
                location_array: Some(locations.iter().map(|s| s.to_string()).collect()),
            },
        }
    }

    #[test]
    fn test_search_is_debounced_dropdowns_are_not() {
        let mut l = listing(ListingMode::Public);
        assert_eq!(l.set_search("rust"), Refetch::Debounced);
        assert_eq!(l.set_search("rust"), Refetch::Skip);
        assert_eq!(l.set_work_policy(Choice::Only(WorkPolicy::Remote)), Refetch::Now);
        assert_eq!(l.set_sort(JobSort::Newest), Refetch::Skip);
    }

    #[test]
    fn test_manage_mode_resets_page_public_keeps_it() {
        let mut manage = listing(ListingMode::Manage);
        manage.filters.page = 3;
        manage.set_status(Choice::Only(JobStatus::Open));
        assert_eq!(manage.filters.page, 1);

        let mut public = listing(ListingMode::Public);
        public.filters.page = 3;
        public.set_location(Choice::Only("Pune".into()));
        assert_eq!(public.filters.page, 3);
    }

    #[test]
    fn test_navigation_respects_bounds() {
        let mut l = listing(ListingMode::Public);
        assert_eq!(l.previous_page(), Refetch::Skip);
        assert_eq!(l.next_page(), Refetch::Skip);

        let ticket = l.issue_ticket();
        l.apply(ticket, Ok(response(25, &[])));
        assert_eq!(l.next_page(), Refetch::Now);
        assert_eq!(l.next_page(), Refetch::Now);
        assert_eq!(l.filters.page, 3);
        assert_eq!(l.next_page(), Refetch::Skip);
        assert_eq!(l.nav().label(), "Page 3 of 3");
        assert_eq!(l.previous_page(), Refetch::Now);
        assert_eq!(l.filters.page, 2);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut l = listing(ListingMode::Public);
        let first = l.issue_ticket();
        let second = l.issue_ticket();

        assert!(l.apply(second, Ok(response(7, &["Pune"]))));
        assert!(!l.apply(first, Ok(response(99, &["Delhi"]))));
        assert_eq!(l.total_count, 7);
        assert_eq!(l.locations, ["Pune"]);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut l = listing(ListingMode::Public);
        let first = l.issue_ticket();
        let _second = l.issue_ticket();
        l.apply(first, Ok(response(1, &[])));
        assert_eq!(l.view(), ListingView::Loading);
    }

    #[test]
    fn test_error_degrades_to_empty() {
        let mut l = listing(ListingMode::Public);
        let ticket = l.issue_ticket();
        let mut first = response(7, &["Pune"]);
        first.metadata.open_jobs = 5;
        first.metadata.closed_jobs = 2;
        l.apply(ticket, Ok(first));
        assert_eq!((l.open_jobs, l.closed_jobs), (5, 2));

        let ticket = l.issue_ticket();
        assert_eq!(l.view().message(), Some("Loading..."));
        l.apply(ticket, Err(AppError::from_status(502, "")));

        assert_eq!(l.view(), ListingView::Empty);
        assert_eq!(l.view().message(), Some("No open positions at the moment."));
        assert_eq!(l.total_count, 0);
        assert_eq!(l.open_jobs, 0);
        assert_eq!(l.closed_jobs, 0);
        assert!(l.locations.is_empty());
        assert!(l.last_error.is_some());
    }

    #[test]
    fn test_locations_only_tracked_on_public_page() {
        let mut l = listing(ListingMode::Manage);
        let ticket = l.issue_ticket();
        l.apply(ticket, Ok(response(2, &["Pune"])));
        assert!(l.locations.is_empty());
    }

    #[test]
    fn test_clear_filters_resets_everything_but_company() {
        let mut l = listing(ListingMode::Public);
        assert_eq!(l.clear_filters(), Refetch::Skip);
        l.set_search("rust");
        l.set_sort(JobSort::Lowest);
        assert_eq!(l.clear_filters(), Refetch::Now);
        assert_eq!(l.filters, JobFilters::for_company(CompanyId::new("c1")));
    }
}
